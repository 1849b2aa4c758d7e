use gloo::storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// LocalStorage key under which a value is persisted.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalStored: StorageKey + Serialize + DeserializeOwned + Sized {
    fn local_or_default() -> Self
    where
        Self: Default,
    {
        LocalStorage::get(Self::KEY).unwrap_or_default()
    }

    fn local_load() -> Option<Self> {
        LocalStorage::get(Self::KEY).ok()
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("failed to persist {}: {:?}", Self::KEY, err);
        }
    }
}

impl<T: StorageKey + Serialize + DeserializeOwned> LocalStored for T {}

pub(crate) fn local_save_opt<T: LocalStored>(value: &Option<T>) {
    match value {
        Some(value) => value.local_save(),
        None => LocalStorage::delete(T::KEY),
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Formats a value for the three-digit counters in the nav bar.
pub(crate) fn format_for_counter(value: i32) -> String {
    format!("{:03}", value.clamp(0, 999))
}
