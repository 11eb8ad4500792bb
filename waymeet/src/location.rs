//! One-shot device position with a static fallback.

use crate::errors::{StoreError, StoreResult};
use crate::types::UserLocation;

/// Coordinates used whenever the device position is unavailable.
pub struct DefaultLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: &'static str,
}

pub const DEFAULT_LOCATION: DefaultLocation = DefaultLocation {
    latitude: -23.3045,
    longitude: -51.1696,
    city: "Londrina, Brasil",
};

impl DefaultLocation {
    pub fn to_location(&self) -> UserLocation {
        UserLocation::new(self.latitude, self.longitude).with_city(self.city)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Source of device positions.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    async fn request_permission(&mut self) -> StoreResult<PermissionStatus>;
    async fn current_position(&mut self) -> StoreResult<UserLocation>;
}

/// Always grants and reports the same coordinate.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    location: UserLocation,
}

impl FixedProvider {
    pub fn new(location: UserLocation) -> Self {
        Self { location }
    }
}

impl LocationProvider for FixedProvider {
    async fn request_permission(&mut self) -> StoreResult<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn current_position(&mut self) -> StoreResult<UserLocation> {
        Ok(self.location.clone())
    }
}

/// A device where the user refused location access.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedProvider;

impl LocationProvider for DeniedProvider {
    async fn request_permission(&mut self) -> StoreResult<PermissionStatus> {
        Ok(PermissionStatus::Denied)
    }

    async fn current_position(&mut self) -> StoreResult<UserLocation> {
        Err(StoreError::InvalidRequest {
            message: "location permission denied".to_string(),
        })
    }
}

/// Wraps a provider; never fails, asks the provider on every call.
pub struct LocationService<P> {
    provider: P,
    fallback: UserLocation,
}

impl<P: LocationProvider> LocationService<P> {
    pub fn new(provider: P) -> Self {
        Self::with_fallback(provider, DEFAULT_LOCATION.to_location())
    }

    pub fn with_fallback(provider: P, fallback: UserLocation) -> Self {
        Self { provider, fallback }
    }

    /// `true` only for an explicit grant; provider errors count as refusal.
    pub async fn request_permission(&mut self) -> bool {
        match self.provider.request_permission().await {
            Ok(status) => status == PermissionStatus::Granted,
            Err(err) => {
                log::warn!("location permission request failed: {err}");
                false
            }
        }
    }

    pub async fn get_current_location(&mut self) -> UserLocation {
        if !self.request_permission().await {
            log::debug!("location permission not granted, using fallback");
            return self.fallback.clone();
        }
        match self.provider.current_position().await {
            Ok(location) => UserLocation {
                latitude: location.latitude,
                longitude: location.longitude,
                city: None,
            },
            Err(err) => {
                log::warn!("reading device position failed: {err}");
                self.fallback.clone()
            }
        }
    }

    pub fn default_location(&self) -> UserLocation {
        self.fallback.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenGps;

    impl LocationProvider for BrokenGps {
        async fn request_permission(&mut self) -> StoreResult<PermissionStatus> {
            Ok(PermissionStatus::Granted)
        }

        async fn current_position(&mut self) -> StoreResult<UserLocation> {
            Err(StoreError::storage("gps timeout"))
        }
    }

    struct PermissionCrash;

    impl LocationProvider for PermissionCrash {
        async fn request_permission(&mut self) -> StoreResult<PermissionStatus> {
            Err(StoreError::storage("permission api unavailable"))
        }

        async fn current_position(&mut self) -> StoreResult<UserLocation> {
            Ok(UserLocation::new(0.0, 0.0))
        }
    }

    #[tokio::test]
    async fn granted_position_is_returned_without_city() {
        let here = UserLocation::new(-25.4284, -49.2733).with_city("Curitiba");
        let mut service = LocationService::new(FixedProvider::new(here));
        let location = service.get_current_location().await;
        assert_eq!(location, UserLocation::new(-25.4284, -49.2733));
    }

    #[tokio::test]
    async fn denied_permission_falls_back() {
        let mut service = LocationService::new(DeniedProvider);
        assert!(!service.request_permission().await);
        assert_eq!(service.get_current_location().await, DEFAULT_LOCATION.to_location());
    }

    #[tokio::test]
    async fn read_failure_falls_back() {
        let mut service = LocationService::new(BrokenGps);
        assert_eq!(service.get_current_location().await.city.as_deref(), Some("Londrina, Brasil"));
    }

    #[tokio::test]
    async fn permission_error_counts_as_denied() {
        let mut service = LocationService::new(PermissionCrash);
        assert!(!service.request_permission().await);
        assert_eq!(service.get_current_location().await, service.default_location());
    }
}
