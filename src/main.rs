fn main() {
    ecocast::app::cli::run();
}
