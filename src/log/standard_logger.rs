use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use crate::log::LoggerSettings;

// ISO 8601 timestamp, color coded level, module path
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

impl LoggerSettings {
    /// Installs a console logger matching these settings, or reconfigures the one already
    /// installed.
    pub(in crate::log) fn apply(&mut self) {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        let mut builder =
            Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
        for (module, level) in &self.module_levels {
            builder = builder.logger(Logger::builder().build(module.clone(), *level));
        }
        let root = Root::builder().appender("stdout").build(self.global_level);
        let config = match builder.build(root) {
            Ok(config) => config,
            Err(e) => panic!("failed to build logger config: {e}"),
        };

        match self.handle {
            Some(ref handle) => handle.set_config(config),
            None => match log4rs::init_config(config) {
                Ok(handle) => self.handle = Some(handle),
                // Another logger already owns the `log` facade; leave it in charge.
                Err(_) => {}
            },
        }
    }
}
