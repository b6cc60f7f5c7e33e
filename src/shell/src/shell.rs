//! Event loop driving the core from the terminal
//!
//! The core lives on the main task. HTTP requests and timers run as spawned
//! tasks and report back over a channel; their outputs are resolved against
//! the core in arrival order.

use anyhow::{Context, Result, anyhow};
use crux_core::{Core, Request};
use crux_http::protocol::{HttpRequest, HttpResult};
use reqwest::Client;
use std::{collections::HashMap, time::Duration};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{UnboundedSender, unbounded_channel},
};
use wifi_setup_core::{App, Effect, Event, TimerOperation, TimerOutput};

use crate::{
    config::ShellConfig,
    http_client::{device_client, execute},
    input::{HELP, Input, parse_input, to_events},
    render::render_view,
};

/// Output of a finished effect, keyed by the id of its pending request
enum Resolution {
    Http { id: u64, result: HttpResult },
    Timer { id: u64, output: TimerOutput },
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Shell {
    core: Core<App>,
    client: Client,
    device_url: String,
    resolutions: UnboundedSender<Resolution>,
    pending_http: HashMap<u64, Request<HttpRequest>>,
    pending_timers: HashMap<u64, Request<TimerOperation>>,
    next_id: u64,
    last_frame: String,
}

/// Run until the user quits, stdin closes or Ctrl-C arrives
pub async fn run(config: ShellConfig) -> Result<()> {
    let client = device_client(config.request_timeout)?;
    let (tx, mut rx) = unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut shell = Shell {
        core: Core::new(),
        client,
        device_url: config.device_url,
        resolutions: tx,
        pending_http: HashMap::new(),
        pending_timers: HashMap::new(),
        next_id: 0,
        last_frame: String::new(),
    };

    println!("{HELP}");
    shell.dispatch(Event::Initialize);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("failed to read stdin")? {
                    Some(line) => {
                        if shell.handle_line(&line) == Flow::Quit {
                            return Ok(());
                        }
                    }
                    None => {
                        log::debug!("stdin closed");
                        break;
                    }
                }
            }
            Some(resolution) = rx.recv() => shell.resolve(resolution)?,
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for ctrl-c")?;
                log::debug!("ctrl-c");
                break;
            }
        }
    }

    shell.dispatch(Event::Teardown);
    Ok(())
}

impl Shell {
    fn handle_line(&mut self, line: &str) -> Flow {
        let view = self.core.view();
        let input = parse_input(line, view.password_prompt.is_some());

        match &input {
            Input::Help => println!("{HELP}"),
            Input::Unknown(text) => println!("unknown command {text:?}, {HELP}"),
            Input::Select(row) => log::debug!("select row {row}"),
            _ => {}
        }

        let quit = input == Input::Quit;
        match to_events(input, &view) {
            Some(events) => events.into_iter().for_each(|event| self.dispatch(event)),
            None => log::debug!("input ignored"),
        }

        if quit { Flow::Quit } else { Flow::Continue }
    }

    fn dispatch(&mut self, event: Event) {
        log::debug!("event: {event:?}");
        let effects = self.core.process_event(event);
        self.process(effects);
    }

    fn resolve(&mut self, resolution: Resolution) -> Result<()> {
        let effects = match resolution {
            Resolution::Http { id, result } => {
                let Some(mut request) = self.pending_http.remove(&id) else {
                    log::warn!("no pending http request {id}");
                    return Ok(());
                };
                self.core
                    .resolve(&mut request, result)
                    .map_err(|e| anyhow!("failed to resolve http request {id}: {e:?}"))?
            }
            Resolution::Timer { id, output } => {
                let Some(mut request) = self.pending_timers.remove(&id) else {
                    log::warn!("no pending timer {id}");
                    return Ok(());
                };
                self.core
                    .resolve(&mut request, output)
                    .map_err(|e| anyhow!("failed to resolve timer {id}: {e:?}"))?
            }
        };
        self.process(effects);
        Ok(())
    }

    fn process(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(_) => self.render(),
                Effect::Http(request) => self.spawn_http(request),
                Effect::Timer(request) => self.spawn_timer(request),
            }
        }
    }

    fn render(&mut self) {
        let frame = render_view(&self.core.view());
        if frame != self.last_frame {
            print!("{frame}");
            self.last_frame = frame;
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn spawn_http(&mut self, request: Request<HttpRequest>) {
        let id = self.next_id();
        let operation = request.operation.clone();
        self.pending_http.insert(id, request);

        let client = self.client.clone();
        let device_url = self.device_url.clone();
        let tx = self.resolutions.clone();
        tokio::spawn(async move {
            let result = execute(&client, &device_url, &operation).await;
            if tx.send(Resolution::Http { id, result }).is_err() {
                log::debug!("shell gone, dropping http result {id}");
            }
        });
    }

    fn spawn_timer(&mut self, request: Request<TimerOperation>) {
        let id = self.next_id();
        let TimerOperation::After { millis } = request.operation;
        self.pending_timers.insert(id, request);

        let tx = self.resolutions.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            let output = TimerOutput::Elapsed;
            if tx.send(Resolution::Timer { id, output }).is_err() {
                log::debug!("shell gone, dropping timer {id}");
            }
        });
    }
}
