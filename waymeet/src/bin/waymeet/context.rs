use anyhow::{Context, Result, bail};
use waymeet::storage::AnyStorage;
use waymeet::{App, ConfigContext, DeniedProvider, FixedProvider, LocationProvider, StoreResult, UserLocation};
use waymeet::location::PermissionStatus;

use crate::output::OutputManager;

/// The device position the CLI pretends to have.
///
/// Without `--lat/--lon` the device refuses permission, so every lookup lands
/// on the configured fallback.
pub enum Device {
    Fixed(FixedProvider),
    Denied(DeniedProvider),
}

impl Device {
    pub fn from_args(lat: Option<f64>, lon: Option<f64>) -> Result<Self> {
        match (lat, lon) {
            (Some(latitude), Some(longitude)) => {
                Ok(Device::Fixed(FixedProvider::new(UserLocation::new(latitude, longitude))))
            }
            (None, None) => Ok(Device::Denied(DeniedProvider)),
            _ => bail!("--lat and --lon must be given together"),
        }
    }
}

impl LocationProvider for Device {
    async fn request_permission(&mut self) -> StoreResult<PermissionStatus> {
        match self {
            Device::Fixed(inner) => inner.request_permission().await,
            Device::Denied(inner) => inner.request_permission().await,
        }
    }

    async fn current_position(&mut self) -> StoreResult<UserLocation> {
        match self {
            Device::Fixed(inner) => inner.current_position().await,
            Device::Denied(inner) => inner.current_position().await,
        }
    }
}

pub type CliApp = App<AnyStorage, Device>;

/// Loaded config plus an app whose session has been restored from storage.
pub struct CliContext {
    pub config: ConfigContext,
    pub app: CliApp,
}

impl CliContext {
    pub async fn open(device: Device, output: &OutputManager) -> Result<Self> {
        let config = ConfigContext::find().context("Failed to load waymeet config")?;
        if config.loaded {
            log::debug!("config loaded from {}", config.config_path.display());
        } else {
            log::debug!("no config file found, using defaults");
        }

        let storage = AnyStorage::from_settings(&config.config.storage)
            .await
            .with_context(|| format!("Failed to open {:?} storage", config.config.storage.backend))?;

        let mut app = App::from_config(storage, device, &config.config);
        output.progress("Restoring session");
        app.session.check_session().await;
        output.clear_line();

        Ok(Self { config, app })
    }
}
