fn main() {
    projdeck::app::cli::run();
}
