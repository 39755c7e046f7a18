pub use crate::config::ParametersConfig;
pub use crate::disposition::{Disposition, DispositionKind};
pub use crate::error::ParameterError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::parameters::{Parameters, ParametersBuilder, PopulationSource};
pub use crate::regions::Regions;
pub use crate::request::{construct_parameters, construct_parameters_from_json};
