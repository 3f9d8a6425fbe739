//! Python bindings for the Set engine.
//!
//! # Quick Start
//!
//! ```python
//! import set_engine
//!
//! game = set_engine.SetGame(mode="full", seed=42)
//! a, b, c = game.hint()
//! game.toggle(a)
//! game.toggle(b)
//! game.toggle(c)   # "set_found"
//!
//! game.advance_ms(1000)
//! print(game.status())   # None once the notification expired
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_game;

pub use py_cards::*;
pub use py_game::*;

/// set_engine: rules engine for the card game Set.
#[pymodule]
fn set_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySetGame>()?;
    m.add_function(wrap_pyfunction!(py_is_valid_set, m)?)?;
    Ok(())
}
