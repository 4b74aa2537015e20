//! Shared type definitions for the horoscope astrology service.
//!
//! Types defined here are serialized to clients as JSON and flow to
//! `TypeScript` via `ts-rs` for the web front end.
//!
//! # Modules
//!
//! - [`enums`] -- Fixed domain tables (bodies, signs, aspects, lunar phases)
//! - [`structs`] -- Snapshot records, charts, and transit/sky reports

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AspectKind, MoonPhase, Planet, ZodiacSign};
pub use structs::{
    Aspect, BirthData, CelestialBody, Chart, HouseCusp, SkyReport, TransitReport, UNKNOWN_SIGN,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::enums::Planet::export_all();
        let _ = crate::enums::ZodiacSign::export_all();
        let _ = crate::enums::AspectKind::export_all();
        let _ = crate::enums::MoonPhase::export_all();

        let _ = crate::structs::CelestialBody::export_all();
        let _ = crate::structs::HouseCusp::export_all();
        let _ = crate::structs::Aspect::export_all();
        let _ = crate::structs::BirthData::export_all();
        let _ = crate::structs::Chart::export_all();
        let _ = crate::structs::TransitReport::export_all();
        let _ = crate::structs::SkyReport::export_all();
    }
}
