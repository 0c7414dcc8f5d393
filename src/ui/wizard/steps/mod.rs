//! Render methods for each wizard stage

mod fields;
mod submitted;
mod summary;

pub use summary::summary_label;
