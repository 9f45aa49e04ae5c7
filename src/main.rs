fn main() {
    grid_init::app::cli::run();
}
