pub mod reports;
pub mod scenarios;
pub mod tester;

pub use scenarios::{find_scenario, list_scenarios};
pub use tester::{LogicTester, ScenarioResult};
