//! Interactive text menu over a [`TaskManager`].

use std::io::{self, BufRead, Write};

use smarttask_core::{priority_glyph, priority_label, Priority, TaskId};
use smarttask_work::TaskManager;
use tracing::debug;

/// Menu behaviour knobs.
#[derive(Debug, Clone, Default)]
pub struct MenuConfig {
    /// Wait for ENTER after each action
    pub pause_after_action: bool,
}

impl MenuConfig {
    /// Settings for a human at a terminal.
    pub fn interactive() -> Self {
        Self {
            pause_after_action: true,
        }
    }
}

/// Menu session: the manager plus the streams it talks through.
pub struct MenuApp<R, W> {
    manager: TaskManager,
    input: R,
    output: W,
    config: MenuConfig,
    eof: bool,
}

impl<R: BufRead, W: Write> MenuApp<R, W> {
    /// Create a session with an empty manager.
    pub fn new(input: R, output: W, config: MenuConfig) -> Self {
        Self {
            manager: TaskManager::new(),
            input,
            output,
            config,
            eof: false,
        }
    }

    /// The session's manager.
    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Welcome to SmartTask ===")?;

        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = line.trim().parse::<i64>().unwrap_or(-1);
            debug!("Menu choice: {}", choice);

            match choice {
                1 => self.add_task()?,
                2 => self.list_tasks()?,
                3 => self.complete_task()?,
                4 => self.remove_task()?,
                5 => self.find_task()?,
                6 => self.filter_by_priority()?,
                7 => self.show_stats()?,
                0 => {
                    writeln!(self.output, "\nThanks for using SmartTask. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "\nInvalid option, please try again.")?,
            }

            if self.eof {
                break;
            }
            if self.config.pause_after_action {
                writeln!(self.output, "\nPress ENTER to continue...")?;
                self.read_line()?;
            }
        }

        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- MAIN MENU ---")?;
        writeln!(self.output, "1. Add task")?;
        writeln!(self.output, "2. List all tasks")?;
        writeln!(self.output, "3. Mark task as completed")?;
        writeln!(self.output, "4. Remove task")?;
        writeln!(self.output, "5. Find task by ID")?;
        writeln!(self.output, "6. Filter by priority")?;
        writeln!(self.output, "7. Statistics")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number(&mut self, text: &str) -> io::Result<Option<i64>> {
        Ok(self.prompt(text)?.and_then(|line| line.trim().parse().ok()))
    }

    fn prompt_id(&mut self, text: &str) -> io::Result<Option<TaskId>> {
        Ok(self.prompt(text)?.and_then(|line| line.parse().ok()))
    }

    fn prompt_priority(&mut self) -> io::Result<Option<i64>> {
        writeln!(self.output, "\nSelect priority:")?;
        for priority in Priority::ALL {
            writeln!(
                self.output,
                "{}. {} {}",
                priority.level(),
                priority.glyph(),
                priority.label()
            )?;
        }
        self.prompt_number("Option: ")
    }

    fn add_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- ADD TASK ---")?;
        let name = self.prompt("Task name: ")?.unwrap_or_default();
        if name.trim().is_empty() {
            writeln!(self.output, "\nError: the name cannot be empty.")?;
            return Ok(());
        }

        let priority = match self.prompt_priority()? {
            Some(level) if Priority::from_level(level).is_some() => level,
            _ => {
                writeln!(self.output, "\nInvalid priority, using Low.")?;
                Priority::Low.level() as i64
            }
        };

        match self.manager.add_task(&name, priority) {
            Ok(task) => {
                let id = task.id();
                writeln!(self.output, "\nTask added with ID: {id}")?;
            }
            Err(err) => writeln!(self.output, "\nCould not add task: {err}")?,
        }
        Ok(())
    }

    fn list_tasks(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- TASK LIST ---")?;
        if self.manager.is_empty() {
            writeln!(self.output, "\nNo tasks yet.")?;
            return Ok(());
        }

        let tasks = self.manager.list();
        writeln!(self.output, "\nTotal tasks: {}", tasks.len())?;
        for (index, entry) in tasks.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, entry)?;
        }
        Ok(())
    }

    fn complete_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- COMPLETE TASK ---")?;
        if self.manager.is_empty() {
            writeln!(self.output, "\nNo tasks to complete.")?;
            return Ok(());
        }
        self.list_tasks()?;

        let Some(id) = self.prompt_id("\nID of the task to complete: ")? else {
            writeln!(self.output, "\nThat is not a valid ID.")?;
            return Ok(());
        };

        let already_done = match self.manager.find_by_id(id) {
            Some(entry) => entry.task().is_completed(),
            None => {
                writeln!(self.output, "\nNo task found with ID: {id}")?;
                return Ok(());
            }
        };

        if already_done {
            writeln!(self.output, "\nTask {id} is already completed.")?;
        } else {
            self.manager.complete_by_id(id);
            writeln!(self.output, "\nTask {id} marked as completed.")?;
        }
        Ok(())
    }

    fn remove_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- REMOVE TASK ---")?;
        if self.manager.is_empty() {
            writeln!(self.output, "\nNo tasks to remove.")?;
            return Ok(());
        }
        self.list_tasks()?;

        let Some(id) = self.prompt_id("\nID of the task to remove: ")? else {
            writeln!(self.output, "\nThat is not a valid ID.")?;
            return Ok(());
        };

        if self.manager.remove_by_id(id) {
            writeln!(self.output, "\nTask {id} removed.")?;
        } else {
            writeln!(self.output, "\nNo task found with ID: {id}")?;
        }
        Ok(())
    }

    fn find_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- FIND TASK ---")?;
        let Some(id) = self.prompt_id("\nTask ID: ")? else {
            writeln!(self.output, "\nThat is not a valid ID.")?;
            return Ok(());
        };

        match self.manager.find_by_id(id) {
            Some(entry) => writeln!(self.output, "\nTask found:\n{entry}")?,
            None => writeln!(self.output, "\nNo task found with ID: {id}")?,
        }
        Ok(())
    }

    fn filter_by_priority(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- FILTER BY PRIORITY ---")?;
        let level = match self.prompt_priority()? {
            Some(level) if Priority::from_level(level).is_some() => level,
            _ => {
                writeln!(self.output, "\nInvalid priority.")?;
                return Ok(());
            }
        };

        let tasks = self.manager.filter_by_priority(level);
        writeln!(
            self.output,
            "\nTasks with priority {} {}:",
            priority_glyph(level),
            priority_label(level)
        )?;
        if tasks.is_empty() {
            writeln!(self.output, "No tasks with this priority.")?;
        } else {
            for entry in &tasks {
                writeln!(self.output, "{entry}")?;
            }
            writeln!(self.output, "\nTotal found: {}", tasks.len())?;
        }
        Ok(())
    }

    fn show_stats(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- STATISTICS ---")?;
        let stats = self.manager.stats();
        if stats.total == 0 {
            writeln!(self.output, "\nNo tasks yet.")?;
            return Ok(());
        }

        writeln!(self.output, "\nSummary:")?;
        writeln!(self.output, "   Total tasks: {}", stats.total)?;
        writeln!(
            self.output,
            "   Completed: {} ({:.1}%)",
            stats.completed, stats.percent_completed
        )?;
        writeln!(
            self.output,
            "   Pending: {} ({:.1}%)",
            stats.pending, stats.percent_pending
        )?;

        writeln!(self.output, "\nBy priority:")?;
        for (priority, count) in &stats.by_priority {
            writeln!(self.output, "   {} {}: {}", priority.glyph(), priority.label(), count)?;
        }
        Ok(())
    }
}
