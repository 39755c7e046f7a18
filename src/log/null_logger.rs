//! Stand-in used when the `logging` feature is off: no logger is installed, but the public API
//! still controls which messages the `log` facade lets through.

use crate::log::LoggerSettings;

impl LoggerSettings {
    pub(in crate::log) fn apply(&mut self) {
        let most_verbose = self
            .module_levels
            .values()
            .copied()
            .fold(self.global_level, std::cmp::max);
        log::set_max_level(most_verbose);
    }
}
