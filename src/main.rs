fn main() {
    wfctl::app::cli::run();
}
