use env_logger::Env;
use herald::{ClientConfig, NotificationEvent, NotificationHandle};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration};

mod commands;
mod config;
mod form;
mod session;

use commands::{Command, HELP};
use config::CONFIG;
use form::Form;
use session::Center;

#[derive(Serialize)]
struct Status<'a> {
    title: &'a str,
    body: &'a str,
    summary: &'a str,
    use_index: bool,
    urgency: herald::Urgency,
    sent: usize,
    last: Option<NotificationHandle>,
    live: usize,
}

fn print_events(center: &Center) {
    center.poll_events_with(|event, sent_index| {
        let payload = json!({ "event": event, "sentIndex": sent_index });
        println!("{}", payload);
        if let NotificationEvent::ActionInvoked { action_key, .. } = event {
            info!("Action '{}' invoked", action_key);
        }
    });
}

async fn send(center: &Center, form: &mut Form) {
    let index = form.sent;
    match center.send(form.request()).await {
        Ok(handle) => {
            if let Err(e) = center.set_correlation(handle, index) {
                warn!("Could not attach correlation data to {}: {}", handle, e);
            }
            println!("sent {}", handle);
            form.record_sent(Some(handle));
        }
        Err(e) => {
            error!("Send failed: {}", e);
            form.record_sent(None);
        }
    }
}

async fn edit(center: &Center, form: &Form) {
    let Some(handle) = form.last else {
        println!("nothing sent yet");
        return;
    };
    match center.edit(handle, form.content()).await {
        Ok(()) => println!("edited {}", handle),
        Err(e) => error!("Edit failed: {}", e),
    }
}

async fn show_caps(center: &Center) {
    let info = match center.server_information().await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("Server information unavailable: {}", e);
            None
        }
    };
    let payload = json!({
        "server": info,
        "capabilities": center.server_capabilities().names(),
        "platform": center.platform_capabilities(),
    });
    println!("{}", payload);
}

fn show_status(center: &Center, form: &Form) {
    let status = Status {
        title: &form.title,
        body: &form.body,
        summary: &form.summary,
        use_index: form.use_index,
        urgency: form.urgency,
        sent: form.sent,
        last: form.last,
        live: center.live_count(),
    };
    match serde_json::to_string_pretty(&status) {
        Ok(text) => println!("{}", text),
        Err(e) => error!("Failed to render status: {}", e),
    }
}

/// Returns `false` once the harness should exit.
async fn handle(command: Command, center: &Center, form: &mut Form) -> bool {
    match command {
        Command::Send => send(center, form).await,
        Command::Title(text) => form.set_title(&text),
        Command::Body(text) => form.set_body(&text),
        Command::Summary(text) => form.set_summary(&text),
        Command::Index(on) => form.use_index = on,
        Command::Urgency(urgency) => form.urgency = urgency,
        Command::Edit => edit(center, form).await,
        Command::Retract => match form.last {
            Some(handle) => {
                if let Err(e) = center.retract(handle).await {
                    error!("Retract failed: {}", e);
                }
            }
            None => println!("nothing sent yet"),
        },
        Command::RetractAll => {
            if let Err(e) = center.retract_all().await {
                error!("Retract all failed: {}", e);
            }
        }
        Command::Caps => show_caps(center).await,
        Command::Events => print_events(center),
        Command::Status => show_status(center, form),
        Command::Help => println!("{}", HELP),
        Command::Quit => return false,
    }
    true
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ClientConfig::new(CONFIG.app_name.clone());
    let center = match session::start(CONFIG.offline, config).await {
        Ok(center) => center,
        Err(e) => {
            error!("Failed to start notification center: {}", e);
            std::process::exit(1);
        }
    };

    let mut form = Form::new(CONFIG.use_index);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_millis(CONFIG.poll_interval_ms.max(10)));

    info!("Notification harness ready, type 'help' for commands");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(command) => {
                        if !handle(command, &center, &mut form).await {
                            break;
                        }
                    }
                    Err(message) => println!("{}", message),
                }
            }
            _ = ticker.tick() => print_events(&center),
        }
    }

    print_events(&center);
    if let Err(e) = center.shutdown(true).await {
        warn!("Shutdown incomplete: {}", e);
    }
    Ok(())
}
