use std::rc::Rc;

use steady_domain::DashboardConfig;
use yew::prelude::*;

pub type ConfigHandle = Rc<DashboardConfig>;

/// Dashboard config from the surrounding provider, or the defaults
#[hook]
pub fn use_config() -> ConfigHandle {
    use_context::<ConfigHandle>().unwrap_or_default()
}
