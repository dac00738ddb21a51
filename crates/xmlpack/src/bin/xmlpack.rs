fn main() {
    if let Err(err) = xmlpack::run() {
        eprintln!("{}", xmlpack::format_error(&err));
        std::process::exit(1);
    }
}
