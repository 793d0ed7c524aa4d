// Adapters: concrete readers for the spreadsheet formats we accept.

pub mod tabular;
