use scan_core::Formatted;

pub fn print_info(message: &str) {
    println!("[rtlsdr-scan][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[rtlsdr-scan][ERROR]: {message}");
}

pub fn print_formatted(formatted: &Formatted) {
    match formatted {
        Formatted::None => print_info("Nothing to format"),
        Formatted::Frequency(freq) => println!("{freq}"),
        Formatted::Level(level) => println!("{level}"),
        Formatted::Both { freq, level } => {
            println!("{freq}");
            println!("{level}");
        }
    }
}

pub fn print_ports(ports: &[String]) {
    print_info("Serial ports:");
    for port in ports {
        println!("{port}");
    }
}
