use std::str::FromStr;

/// What a line typed into the add field asks for.
///
/// One text field carries three intents:
/// - `-Fruit` adds a divider named `Fruit`
/// - `Apple` adds an item at the end of the list
/// - `Apple-Fruit` adds `Apple` at the end of the `Fruit` section,
///   creating the section first if it does not exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRequest {
    Divider(String),
    Item {
        name: String,
        section: Option<String>,
    },
}

impl FromStr for AddRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err("Nothing to add".to_string());
        }

        if let Some(rest) = input.strip_prefix('-') {
            return Ok(AddRequest::Divider(rest.trim().to_string()));
        }

        // Only the first two segments count: "a-b-c" is item "a" in section "b".
        let mut parts = input.split('-').map(str::trim);
        let name = parts.next().unwrap_or_default().to_string();
        let section = parts
            .next()
            .filter(|section| !section.is_empty())
            .map(str::to_string);

        Ok(AddRequest::Item { name, section })
    }
}
