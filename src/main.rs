fn main() {
    docx2md::app::cli::run();
}
