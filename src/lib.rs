//! SPT QoL Patch - config-driven tweaks for SPT server database tables
//!
//! Loads the mod's `config.jsonc` and applies the enabled patches (hideout,
//! traders, insurance, keys) to the tables the server has loaded. With the
//! `python` feature the crate also builds as a Python extension module.

pub mod classifier;
pub mod config;
pub mod error;
pub mod ids;
pub mod patch;
pub mod tables;

pub use crate::classifier::{ItemClassifier, TemplateHierarchy};
pub use crate::config::PatchConfig;
pub use crate::error::{PatchError, Result};
pub use crate::patch::{apply, Patch, PatchApplier};
pub use crate::tables::{DatabaseTables, InsuranceConfig};

#[cfg(feature = "python")]
mod python {
    use crate::classifier::TemplateHierarchy;
    use crate::config::PatchConfig;
    use crate::tables::{DatabaseTables, InsuranceConfig, JsonDocument};
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Parse a JSONC config document into a nested dict of flags
    #[pyfunction]
    fn parse_config<'py>(py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyDict>> {
        let config = PatchConfig::parse(text)?;

        let hideout = PyDict::new(py);
        hideout.set_item("stashChanges", config.hideout.stash_changes)?;
        hideout.set_item("instantConstruction", config.hideout.instant_construction)?;
        hideout.set_item("bitcoinBuff", config.hideout.bitcoin_buff)?;

        let traders = PyDict::new(py);
        traders.set_item("disableFlea", config.traders.disable_flea)?;
        traders.set_item("insuranceChanges", config.traders.insurance_changes)?;
        traders.set_item("secureAssortChanges", config.traders.secure_assort_changes)?;

        let dict = PyDict::new(py);
        dict.set_item("hideout", hideout)?;
        dict.set_item("traders", traders)?;
        dict.set_item("keyChanges", config.key_changes)?;
        Ok(dict)
    }

    /// Apply the enabled patches to JSON-encoded tables
    ///
    /// # Arguments
    /// * `config_text` - Contents of `config.jsonc`
    /// * `tables_json` - Database tables as JSON
    /// * `insurance_json` - Insurance config as JSON
    ///
    /// # Returns
    /// `(tables_json, insurance_json, applied)` where `applied` lists the
    /// config keys of the patches that ran. Both documents keep their key
    /// order and number formatting; only patched values differ.
    ///
    /// # Raises
    /// KeyError if a well-known id is missing, ValueError on malformed input
    #[pyfunction]
    fn apply_patches(
        config_text: &str,
        tables_json: &str,
        insurance_json: &str,
    ) -> PyResult<(String, String, Vec<String>)> {
        let config = PatchConfig::parse(config_text)?;
        let mut tables = JsonDocument::<DatabaseTables>::parse(tables_json)?;
        let mut insurance = JsonDocument::<InsuranceConfig>::parse(insurance_json)?;
        let hierarchy = TemplateHierarchy::from_templates(&tables.data.templates.items);

        let applied = crate::patch::apply(
            &config,
            &mut tables.data,
            &mut insurance.data,
            &hierarchy,
        )?;

        Ok((
            tables.to_json()?,
            insurance.to_json()?,
            applied.iter().map(|patch| patch.config_key().to_string()).collect(),
        ))
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    #[pymodule]
    fn spt_qol_patch(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(parse_config, m)?)?;
        m.add_function(wrap_pyfunction!(apply_patches, m)?)?;
        Ok(())
    }
}
