//! Runs one timer session in the terminal.
//!
//! The task is picked from the remembered names (or typed in), the category
//! from the category list when the selector is enabled. The elapsed time is
//! redrawn every second until Enter or Ctrl-C stops the timer. If the
//! session cannot be saved the timer keeps running and the next stop request
//! tries again.

use super::open_context;
use crate::{
    libs::{
        log::LogRecord,
        messages::Message,
        task::TaskRef,
        timer::{PresentationTarget, SystemClock, TimerEvent},
        view::{category_options, task_options, SelectOption},
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use std::thread;
use tokio::sync::mpsc;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Task name; prompts when omitted
    #[arg(short, long)]
    task: Option<String>,

    /// Category; prompts when omitted and the category selector is enabled
    #[arg(short, long)]
    category: Option<String>,

    /// Never prompt; missing values are left empty
    #[arg(long)]
    no_prompt: bool,
}

/// Mirrors the timer on the terminal.
struct ConsoleTarget;

impl PresentationTarget for ConsoleTarget {
    fn on_event(&self, event: &TimerEvent) {
        match event {
            TimerEvent::Started { task, category, .. } => {
                msg_success!(Message::TimerStarted {
                    task: task.clone(),
                    category: category.clone(),
                });
                msg_info!(Message::TimerStopHint);
            }
            TimerEvent::Tick(elapsed) => {
                let mut stdout = io::stdout();
                let _ = write!(stdout, "\r⏱  {}", elapsed);
                let _ = stdout.flush();
            }
            TimerEvent::Stopped(record) => {
                println!();
                msg_success!(Message::TimerStopped(record.duration.to_string()));
            }
        }
    }
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let ctx = open_context().await?;
    let interactive = !args.no_prompt && io::stdin().is_terminal();

    let task = match args.task {
        Some(task) => task,
        None if interactive => prompt_task(&ctx.tasks.get_all().await?)?,
        None => String::new(),
    };
    let category = match args.category {
        Some(category) => category,
        None if interactive && ctx.settings.show_category() => prompt_category(&ctx.categories.list())?,
        None => String::new(),
    };

    let console: Arc<dyn PresentationTarget> = Arc::new(ConsoleTarget);
    let mut timer = ctx.timer(Arc::new(SystemClock), vec![console]);
    timer.start(&task, &category).await?;

    let mut stop_requests = stop_requests();
    let record: LogRecord = loop {
        if stop_requests.recv().await.is_none() {
            // stdin closed and no signal handler: nothing can stop us any more.
            break timer.stop().await?;
        }
        match timer.stop().await {
            Ok(record) => break record,
            Err(e) => msg_error!(Message::TimerSaveFailed(e.to_string())),
        }
    };

    msg_success!(Message::SessionSaved(record.id));
    drop(timer);
    ctx.shutdown().await?;
    Ok(())
}

/// Emits one request per Enter press and per Ctrl-C.
fn stop_requests() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();

    // A plain thread so a pending read never holds up runtime shutdown.
    let enter = tx.clone();
    let _ = thread::Builder::new().name("worktimer-stdin".to_string()).spawn(move || {
        for line in io::stdin().lock().lines() {
            if line.is_err() || enter.send(()).is_err() {
                break;
            }
        }
    });

    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });

    rx
}

fn prompt_task(tasks: &[TaskRef]) -> Result<String> {
    let options = task_options(tasks);
    if options.is_empty() {
        return type_task();
    }

    let mut labels: Vec<String> = options.iter().map(|o| o.label.clone()).collect();
    labels.push(Message::NewTaskOption.to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    match options.get(selection) {
        Some(option) => Ok(option.value.clone()),
        None => type_task(),
    }
}

fn type_task() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(name)
}

fn prompt_category(categories: &[String]) -> Result<String> {
    let options: Vec<SelectOption> = category_options(categories);
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectCategory.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection].value.clone())
}
