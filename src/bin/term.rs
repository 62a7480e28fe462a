//! Terminal chat client
//!
//! Line-based front end for the chat widget: reads messages from stdin,
//! prints the conversation as snapshots arrive. `/clear`, `/dismiss` and
//! `/quit` are local commands; everything else goes to the backend.

use moodchat::client::HttpChatClient;
use moodchat::controller::{Message, Sender};
use moodchat::widget::{ChatOptions, ChatSnapshot, ChatWidget};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints each snapshot as a delta over what is already on screen
struct Renderer {
    rendered: Vec<Message>,
    typing: bool,
    connected: bool,
    last_error: Option<String>,
}

impl Renderer {
    fn new() -> Self {
        Self {
            rendered: Vec::new(),
            typing: false,
            connected: true,
            last_error: None,
        }
    }

    fn render(&mut self, snapshot: &ChatSnapshot) {
        // The new log extends the old one unless the chat was cleared
        let retained = self.rendered.len() <= snapshot.messages.len()
            && snapshot.messages[..self.rendered.len()] == self.rendered[..];
        if !retained {
            println!("--- chat cleared ---");
            self.rendered.clear();
        }
        for message in &snapshot.messages[self.rendered.len()..] {
            match message.sender {
                Sender::User => println!("you: {}", message.text),
                Sender::Bot => println!("bot [{}]: {}", message.sentiment, message.text),
            }
        }
        self.rendered.clone_from(&snapshot.messages);

        if snapshot.typing && !self.typing {
            println!("bot is typing ...");
        }
        self.typing = snapshot.typing;

        if snapshot.connected != self.connected {
            if snapshot.connected {
                println!("(back online)");
            } else {
                println!("(offline)");
            }
        }
        self.connected = snapshot.connected;

        if snapshot.last_error != self.last_error {
            if let Some(error) = &snapshot.last_error {
                println!("! {error}");
            }
            self.last_error.clone_from(&snapshot.last_error);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they do not interleave with the conversation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodchat=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url =
        std::env::var("MOODCHAT_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

    let handle = ChatWidget::spawn(HttpChatClient::new(&base_url), ChatOptions::default());
    let mut snapshots = handle.watch();
    let mut renderer = Renderer::new();

    println!("moodchat terminal ({base_url}) - /clear /dismiss /quit");
    let greeting = snapshots.borrow_and_update().clone();
    renderer.render(&greeting);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                renderer.render(&snapshot);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let text = line.trim();
                match text {
                    "" => {}
                    "/quit" => break,
                    "/clear" => handle.clear().await,
                    "/dismiss" => handle.dismiss_error().await,
                    _ => {
                        // Send affordances are a front-end duty: block while a
                        // reply is pending or the backend is known unreachable.
                        let snapshot = handle.snapshot();
                        if snapshot.connected && !snapshot.typing {
                            handle.submit(text).await;
                        } else if snapshot.typing {
                            println!("(still waiting on the last reply)");
                        } else {
                            println!("(backend unreachable - restart this client once it is up)");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
