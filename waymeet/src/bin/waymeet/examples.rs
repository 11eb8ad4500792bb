use crate::commands::{chat, events, explore, init, locate, session, tour};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "init",
            groups: init::EXAMPLES,
        },
        CommandExample {
            name: "session",
            groups: session::EXAMPLES,
        },
        CommandExample {
            name: "events",
            groups: events::EXAMPLES,
        },
        CommandExample {
            name: "chat",
            groups: chat::EXAMPLES,
        },
        CommandExample {
            name: "explore",
            groups: explore::EXAMPLES,
        },
        CommandExample {
            name: "locate",
            groups: locate::EXAMPLES,
        },
        CommandExample {
            name: "tour",
            groups: tour::EXAMPLES,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_has_examples() {
        for example in command_examples() {
            assert!(!example.groups.is_empty(), "{} has no examples", example.name);
            for group in example.groups {
                assert!(group.commands.iter().all(|c| c.starts_with("waymeet ")));
            }
        }
    }
}
