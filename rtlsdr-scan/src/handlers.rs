use crate::commands::*;
use crate::output::*;
use remote::{RemoteConfig, RemoteControl};
use scan_core::settings::{load_scan_config_file, validate_sample_rate};
use scan_core::{
    calc_real_dwell, calc_samples, db_to_level, format_iso_time, format_precision, format_time,
    get_serial_ports, get_version_timestamp, get_version_timestamp_repo, haversine, level_to_db,
    set_version_timestamp, AppPaths, DeploymentMode, ScanConfig,
};
use std::time::Duration;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => {
            log::debug!("Loading settings from {}", path.display());
            load_scan_config_file(path)?
        }
        None => ScanConfig::default(),
    };
    let mode = match cli.bundle_dir {
        Some(bundle_dir) => DeploymentMode::Packaged { bundle_dir },
        None => DeploymentMode::Source,
    };

    match cli.command {
        Commands::Tune {
            frequency,
            addr,
            timeout_ms,
        } => {
            let remote = RemoteControl::with_config(RemoteConfig {
                addr,
                timeout: Duration::from_millis(timeout_ms),
            });
            remote.tune(frequency);
            remote.close()?;
            print_info(&format!("Tune {frequency} sent to {addr}"));
        }
        Commands::Ports => print_ports(&get_serial_ports()),
        Commands::Version { command } => handle_version_command(command, &config, &mode)?,
        Commands::Samples { dwell, sample_rate } => {
            let rate = validate_sample_rate(sample_rate.unwrap_or(config.sample_rate))?;
            println!("samples: {}", calc_samples(dwell, rate));
            println!("dwell: {}", calc_real_dwell(dwell, rate));
        }
        Commands::Format { freq, level, units } => {
            print_formatted(&format_precision(&config.display, freq, level, units.into()));
        }
        Commands::Time {
            timestamp,
            with_date,
            iso,
        } => {
            let text = if iso {
                format_iso_time(timestamp)?
            } else {
                format_time(timestamp, with_date)?
            };
            println!("{text}");
        }
        Commands::Convert { level, db } => match (level, db) {
            (Some(level), _) => println!("{}", level_to_db(level)?),
            (None, Some(db)) => println!("{}", db_to_level(db)),
            (None, None) => return Err("pass --level or --db".into()),
        },
        Commands::Distance {
            lat1,
            lat2,
            lon1,
            lon2,
        } => println!("{:.3}", haversine(lat1, lat2, lon1, lon2)),
        Commands::Paths { resource } => {
            let paths = AppPaths::resolve(&mode)?;
            println!("script: {}", paths.script_dir().display());
            println!("res: {}", paths.res_dir().display());
            if let Some(resource) = resource {
                println!("resource: {}", paths.resource_path(&resource).display());
            }
        }
    }
    Ok(())
}

fn handle_version_command(
    command: VersionCommands,
    config: &ScanConfig,
    mode: &DeploymentMode,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        VersionCommands::Stamp => {
            let paths = AppPaths::resolve(mode)?;
            let seconds = set_version_timestamp(paths.script_dir(), config)?;
            print_info(&format!("Version timestamp set to {seconds}"));
        }
        VersionCommands::Show { seconds } => {
            let paths = AppPaths::resolve(mode)?;
            let stamp = get_version_timestamp(paths.script_dir(), config)?;
            if seconds {
                println!("{}", stamp.seconds);
            } else {
                println!("{}", stamp.display()?);
            }
        }
        VersionCommands::Repo { url } => {
            let url = url.as_deref().unwrap_or(&config.repo_timestamp_url);
            println!("{}", get_version_timestamp_repo(url)?);
        }
    }
    Ok(())
}
