use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nationality {
    Brazil,
    Spain,
    England,
    France,
    Germany,
    Italy,
    Argentina,
    Portugal,
}

impl Nationality {
    pub const ALL: [Nationality; 8] = [
        Nationality::Brazil,
        Nationality::Spain,
        Nationality::England,
        Nationality::France,
        Nationality::Germany,
        Nationality::Italy,
        Nationality::Argentina,
        Nationality::Portugal,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Nationality::Brazil => "Brazil",
            Nationality::Spain => "Spain",
            Nationality::England => "England",
            Nationality::France => "France",
            Nationality::Germany => "Germany",
            Nationality::Italy => "Italy",
            Nationality::Argentina => "Argentina",
            Nationality::Portugal => "Portugal",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
