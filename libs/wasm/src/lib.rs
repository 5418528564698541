//! WASM-facing entry points for the sweep mesh engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call [`extrude_internal`], which returns
//! Rust error types directly instead of `JsValue`.
//!
//! ```
//! let path = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
//! let mesh = sweep_wasm::extrude_internal(&path, &[0.0, 0.0, 1.0], false, false).unwrap();
//! assert_eq!(mesh.vertex_count(), 4);
//! ```

use glam::DVec3;
use sweep_mesh::{profiles, ExtrudeParams, Mesh, SweepError, SweepResult};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "sweep-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Sweeps a flat `[x, y, z, ...]` path along `direction`.
///
/// An empty `direction` array means no direction was given.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the path, direction or footprint is rejected.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = extrude(new Float64Array([0, 0, 0, 1, 0, 0]), new Float64Array([0, 0, 1]), false, false);
/// ```
#[wasm_bindgen]
pub fn extrude(
    path: &[f64],
    direction: &[f64],
    close: bool,
    cap: bool,
) -> Result<MeshHandle, JsValue> {
    extrude_internal(path, direction, close, cap).map_err(to_js_error)
}

/// Host-only variant of [`extrude`] returning Rust errors.
pub fn extrude_internal(
    path: &[f64],
    direction: &[f64],
    close: bool,
    cap: bool,
) -> SweepResult<MeshHandle> {
    let params = ExtrudeParams {
        direction: parse_direction(direction)?,
        close,
        cap,
    };
    let mesh = sweep_mesh::extrude_flat(path, &params)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Returns the capped corridor mesh.
#[wasm_bindgen]
pub fn corridor() -> Result<MeshHandle, JsValue> {
    handle(profiles::corridor_mesh())
}

/// Returns the capped hand mesh.
#[wasm_bindgen]
pub fn hand() -> Result<MeshHandle, JsValue> {
    handle(profiles::hand_mesh())
}

fn handle(mesh: SweepResult<Mesh>) -> Result<MeshHandle, JsValue> {
    let mesh = mesh.map_err(to_js_error)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

fn parse_direction(direction: &[f64]) -> SweepResult<Option<DVec3>> {
    match direction {
        [] => Ok(None),
        [x, y, z] => Ok(Some(DVec3::new(*x, *y, *z))),
        other => Err(SweepError::invalid_direction(format!(
            "direction needs 3 components, got {}",
            other.len()
        ))),
    }
}

fn to_js_error(err: SweepError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
