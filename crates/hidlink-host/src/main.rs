//! hidlink host application entry point.
//!
//! Captures keyboard input from the local machine, folds it into USB HID
//! boot-keyboard reports, and streams the reports over a serial port to the
//! HID adapter plugged into the target.  The target sees a plain USB
//! keyboard; it needs no software, driver, or network access.
//!
//! # Usage
//!
//! ```text
//! hidlink-host [OPTIONS]
//!
//! Options:
//!   --port <PORT>      Serial port of the HID adapter [default: /dev/ttyUSB0]
//!   --baud <BAUD>      Serial baud rate [default: 9600]
//!   --device <DEVICE>  evdev keyboard node (default: auto-discover)
//!   --list-ports       List serial ports visible on this system and exit
//!   --config <CONFIG>  Read configuration from this file
//! ```
//!
//! # Environment variable overrides
//!
//! The CLI flags can also be supplied through environment variables.
//! CLI args take precedence when both are present.
//!
//! | Variable         | Description                       |
//! |------------------|-----------------------------------|
//! | `HIDLINK_PORT`   | Serial port of the HID adapter    |
//! | `HIDLINK_BAUD`   | Serial baud rate                  |
//! | `HIDLINK_DEVICE` | evdev keyboard node to capture    |
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load config            -- CLI > config file > built-in defaults
//!  └─ SerialHidTransport     -- serial link to the HID adapter
//!  └─ EvdevInputSource       -- capture thread → event channel
//!  └─ run_event_pump         -- select! over key events + Ctrl+C
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use hidlink_host::application::assemble_report::{
    AssembleReportUseCase, KeyAction, ReportTransmitter,
};
#[cfg(target_os = "linux")]
use hidlink_host::infrastructure::input_capture::linux_evdev::EvdevInputSource;
use hidlink_host::infrastructure::input_capture::{CaptureError, InputSource, RawKeyEvent};
use hidlink_host::infrastructure::serial::SerialHidTransport;
use hidlink_host::infrastructure::storage::config::{self, HostConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// hidlink host: keyboard-to-serial HID forwarder.
///
/// Captures local keystrokes and streams USB HID boot-keyboard reports over
/// a serial port to the adapter on the target machine.
///
/// The `#[derive(Parser)]` macro from `clap` generates the argument parser
/// automatically from the struct fields and their `#[arg(...)]` attributes.
#[derive(Debug, Parser)]
#[command(
    name = "hidlink-host",
    about = "Forward local keystrokes to another machine as USB HID input",
    version
)]
struct Cli {
    /// Serial port the HID adapter is connected to.
    ///
    /// Overrides `[serial] port` from the config file.
    #[arg(long, env = "HIDLINK_PORT")]
    port: Option<String>,

    /// Baud rate for the serial link.
    ///
    /// Overrides `[serial] baud_rate` from the config file.
    #[arg(long, env = "HIDLINK_BAUD")]
    baud: Option<u32>,

    /// Keyboard device node to capture from (e.g. `/dev/input/event3`).
    ///
    /// Overrides `[capture] device`.  When absent everywhere, the first
    /// keyboard-capable device is discovered at startup.
    #[arg(long, env = "HIDLINK_DEVICE")]
    device: Option<PathBuf>,

    /// List the serial ports visible on this system and exit.
    #[arg(long)]
    list_ports: bool,

    /// Read configuration from this file instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Applies CLI overrides on top of the file configuration.
    ///
    /// Arguments left unset keep whatever the config file (or its built-in
    /// defaults) provided.
    fn apply_to(self, mut cfg: HostConfig) -> HostConfig {
        if let Some(port) = self.port {
            cfg.serial.port = port;
        }
        if let Some(baud) = self.baud {
            cfg.serial.baud_rate = baud;
        }
        if let Some(device) = self.device {
            cfg.capture.device = Some(device);
        }
        cfg
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. `tracing_subscriber` is initialised to format log output.  The log
///    level is controlled by the `RUST_LOG` environment variable (e.g.,
///    `RUST_LOG=debug`).
/// 2. CLI arguments are parsed with `clap` into a [`Cli`] struct and merged
///    over the TOML config file.
/// 3. The serial link to the HID adapter is opened.
/// 4. The keyboard capture backend starts its read thread.
/// 5. [`run_event_pump`] forwards key events until the exit chord
///    (Ctrl+ESC) or Ctrl+C ends the session; a final idle report is sent so
///    no key stays held on the target.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `EnvFilter::try_from_default_env()` reads the `RUST_LOG` environment
    // variable.  If it is absent or invalid, we fall back to `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list_ports {
        return list_serial_ports();
    }

    info!("hidlink host starting");

    // ── Configuration ─────────────────────────────────────────────────────────
    //
    // Precedence: CLI argument > config file > built-in default.
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_file_path()?,
    };
    debug!(path = %config_path.display(), "loading config");
    let cfg = cli.apply_to(config::load_config(&config_path)?);

    // ── Serial link ───────────────────────────────────────────────────────────
    let transport = SerialHidTransport::open(&cfg.serial.port, cfg.serial.baud_rate)?;
    let transmitter: Arc<dyn ReportTransmitter> = Arc::new(transport);
    let mut use_case = AssembleReportUseCase::new(Arc::clone(&transmitter));

    // ── Keyboard capture ──────────────────────────────────────────────────────
    let source = make_input_source(&cfg)?;
    let mut events = source.start()?;

    info!("modifier keys (Ctrl, Alt, Shift, Meta) are forwarded; clipboard paste is not");
    info!("press Ctrl+ESC (or Ctrl+C here) to exit");

    // ── Event pump ────────────────────────────────────────────────────────────
    let pump_result = run_event_pump(&mut use_case, &mut events).await;

    // Lift any key still held on the target before dropping the link.
    if let Err(e) = transmitter.release().await {
        warn!("final release failed: {e}");
    }
    source.stop();

    info!("hidlink host stopped");
    pump_result
}

/// Races the capture channel against Ctrl+C until either ends the session.
///
/// Transmit failures are logged and the pump keeps running; a single failed
/// write (adapter briefly unplugged, buffer full) should not kill the
/// session.
///
/// # Errors
///
/// Returns an error if the capture channel closes unexpectedly, which means
/// the capture thread died (device unplugged or read failure).
async fn run_event_pump(
    use_case: &mut AssembleReportUseCase,
    events: &mut UnboundedReceiver<RawKeyEvent>,
) -> anyhow::Result<()> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("received Ctrl+C — initiating graceful shutdown");
                return Ok(());
            }
            maybe_event = events.recv() => {
                let Some(event) = maybe_event else {
                    return Err(CaptureError::ChannelClosed.into());
                };
                match use_case.handle_event(event).await {
                    Ok(KeyAction::Continue) => {}
                    Ok(KeyAction::Exit) => {
                        info!("exit chord pressed — initiating graceful shutdown");
                        return Ok(());
                    }
                    Err(e) => error!("failed to forward report: {e}"),
                }
            }
        }
    }
}

/// Builds the platform keyboard capture backend.
fn make_input_source(cfg: &HostConfig) -> Result<Box<dyn InputSource>, CaptureError> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(EvdevInputSource::new(cfg.capture.device.clone())))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let _ = cfg;
        Err(CaptureError::UnsupportedPlatform(
            "keyboard capture is only implemented for Linux evdev",
        ))
    }
}

/// Prints the serial ports visible on this system, one per line.
fn list_serial_ports() -> anyhow::Result<()> {
    let ports = tokio_serial::available_ports().context("failed to enumerate serial ports")?;
    if ports.is_empty() {
        println!("no serial ports found");
        return Ok(());
    }
    for port in ports {
        match port.port_type {
            tokio_serial::SerialPortType::UsbPort(usb) => {
                let product = usb.product.unwrap_or_else(|| "USB serial device".to_string());
                println!("{}\t{}", port.port_name, product);
            }
            _ => println!("{}", port.port_name),
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_have_no_overrides() {
        // Arrange: parse with no arguments
        let cli = Cli::parse_from(["hidlink-host"]);

        // Assert
        assert_eq!(cli.port, None);
        assert_eq!(cli.baud, None);
        assert_eq!(cli.device, None);
        assert!(!cli.list_ports);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_port_override() {
        let cli = Cli::parse_from(["hidlink-host", "--port", "/dev/ttyACM0"]);
        assert_eq!(cli.port.as_deref(), Some("/dev/ttyACM0"));
    }

    #[test]
    fn test_cli_baud_override() {
        let cli = Cli::parse_from(["hidlink-host", "--baud", "115200"]);
        assert_eq!(cli.baud, Some(115_200));
    }

    #[test]
    fn test_cli_device_override() {
        let cli = Cli::parse_from(["hidlink-host", "--device", "/dev/input/event5"]);
        assert_eq!(cli.device, Some(PathBuf::from("/dev/input/event5")));
    }

    #[test]
    fn test_cli_list_ports_flag() {
        let cli = Cli::parse_from(["hidlink-host", "--list-ports"]);
        assert!(cli.list_ports);
    }

    #[test]
    fn test_cli_config_path_override() {
        let cli = Cli::parse_from(["hidlink-host", "--config", "/tmp/alt.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/alt.toml")));
    }

    #[test]
    fn test_apply_to_with_no_args_keeps_file_config() {
        // Arrange
        let cli = Cli::parse_from(["hidlink-host"]);
        let mut file_cfg = HostConfig::default();
        file_cfg.serial.port = "/dev/ttyACM3".to_string();
        file_cfg.serial.baud_rate = 57_600;

        // Act
        let cfg = cli.apply_to(file_cfg.clone());

        // Assert
        assert_eq!(cfg, file_cfg);
    }

    #[test]
    fn test_apply_to_overrides_serial_settings() {
        // Arrange
        let cli = Cli::parse_from(["hidlink-host", "--port", "/dev/ttyACM0", "--baud", "115200"]);

        // Act
        let cfg = cli.apply_to(HostConfig::default());

        // Assert
        assert_eq!(cfg.serial.port, "/dev/ttyACM0");
        assert_eq!(cfg.serial.baud_rate, 115_200);
    }

    #[test]
    fn test_apply_to_overrides_capture_device() {
        let cli = Cli::parse_from(["hidlink-host", "--device", "/dev/input/event5"]);
        let cfg = cli.apply_to(HostConfig::default());
        assert_eq!(cfg.capture.device, Some(PathBuf::from("/dev/input/event5")));
    }

    #[test]
    fn test_apply_to_merges_cli_and_file_values() {
        // Arrange: port from the CLI, baud from the file
        let cli = Cli::parse_from(["hidlink-host", "--port", "/dev/ttyACM0"]);
        let mut file_cfg = HostConfig::default();
        file_cfg.serial.baud_rate = 57_600;

        // Act
        let cfg = cli.apply_to(file_cfg);

        // Assert
        assert_eq!(cfg.serial.port, "/dev/ttyACM0");
        assert_eq!(cfg.serial.baud_rate, 57_600);
    }
}
