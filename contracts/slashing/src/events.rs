use cosmwasm_std::Event;

pub const PARAMS_UPDATE_EVENT: &str = "slashing_params_update";

/// Creates an event listing the parameter keys written by an update.
pub fn new_params_update_event<'a>(keys: impl IntoIterator<Item = &'a str>) -> Event {
    let keys: Vec<&str> = keys.into_iter().collect();
    Event::new(PARAMS_UPDATE_EVENT).add_attribute("keys", keys.join(","))
}
