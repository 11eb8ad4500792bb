use anyhow::{Result, bail};
use clap::Subcommand;

use crate::context::{CliContext, Device};
use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::ChatView;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Group Chat",
    commands: &[
        "waymeet chat show 1                      # Messages of event 1",
        "waymeet chat send 1 \"Chego às 18h\"       # Post as the signed-in user",
    ],
}];

#[derive(Subcommand)]
pub enum ChatCommands {
    /// Show an event's messages
    #[command(name = "show")]
    Show { event_id: String },

    /// Send a message as the signed-in user
    #[command(name = "send")]
    Send { event_id: String, text: String },
}

pub async fn handle_chat_commands(command: ChatCommands, device: Device, output: &OutputManager) -> Result<()> {
    let mut ctx = CliContext::open(device, output).await?;
    let app = &mut ctx.app;

    let event_id = match &command {
        ChatCommands::Show { event_id } | ChatCommands::Send { event_id, .. } => event_id.clone(),
    };
    if app.events.get_event(&event_id).is_none() {
        bail!("Event {event_id} not found");
    }

    output.progress("Loading messages");
    app.chat.fetch_messages(&event_id).await;
    output.clear_line();

    if let ChatCommands::Send { text, .. } = command {
        let Some(user_id) = app.session.user().map(|u| u.id.clone()) else {
            bail!("Not signed in. Run 'waymeet session login <email>' first.");
        };
        if text.trim().is_empty() {
            bail!("Message is empty");
        }
        app.chat.send_message(&event_id, &user_id, text.trim());
        output.success("Message sent");
    }

    let view = ChatView {
        messages: app.chat.messages_for(&event_id).to_vec(),
        event_id,
    };
    if view.messages.is_empty() {
        output.info("No messages yet");
    }
    output.display(&view)
}
