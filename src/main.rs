use dlcore::error::{get_exit_code, set_exit_code};

fn main() {
    let result = dirlist::dlmain(dlcore::args_os());
    if let Err(e) = result {
        let message = e.to_string();
        if !message.is_empty() {
            eprintln!("{}: {message}", dlcore::util_name());
        }
        set_exit_code(e.code());
    }
    std::process::exit(get_exit_code());
}
