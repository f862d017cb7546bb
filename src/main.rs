fn main() {
    buildpin::app::cli::run();
}
