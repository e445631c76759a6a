use crate::error::{MinimizeError, Result};

pub(crate) fn positive(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(MinimizeError::InvalidConfig(format!(
            "{name} must be finite and > 0, got {v}"
        )))
    }
}

pub(crate) fn non_negative(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(MinimizeError::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {v}"
        )))
    }
}

pub(crate) fn shrink_factor(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && 0.0 < v && v < 1.0 {
        Ok(())
    } else {
        Err(MinimizeError::InvalidConfig(format!(
            "{name} must be in (0, 1), got {v}"
        )))
    }
}

pub(crate) fn grow_factor(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 1.0 {
        Ok(())
    } else {
        Err(MinimizeError::InvalidConfig(format!(
            "{name} must be finite and >= 1, got {v}"
        )))
    }
}

pub(crate) fn at_least_one(name: &str, v: usize) -> Result<()> {
    if v >= 1 {
        Ok(())
    } else {
        Err(MinimizeError::InvalidConfig(format!("{name} must be >= 1")))
    }
}
