/// Port offered when the system reports none.
pub fn default_serial_port() -> &'static str {
    if cfg!(windows) {
        "COM1"
    } else {
        "/dev/ttyS0"
    }
}

/// Lists serial port device names; never empty.
pub fn get_serial_ports() -> Vec<String> {
    let ports = match serialport::available_ports() {
        Ok(ports) => ports.into_iter().map(|port| port.port_name).collect(),
        Err(err) => {
            log::warn!("Serial port enumeration failed: {err}");
            Vec::new()
        }
    };
    with_default_port(ports)
}

fn with_default_port(mut ports: Vec<String>) -> Vec<String> {
    if ports.is_empty() {
        ports.push(default_serial_port().to_string());
    }
    ports
}
