//! The command engine: dispatches commands to store operations.
//!
//! Every command yields exactly one result line. Business-rule failures
//! (duplicate, not found, unknown command) are ordinary result lines. Failures
//! caused by unusable input are handled according to the configured
//! [`FailurePolicy`].

use std::borrow::Borrow;

use joinery_foundation::{Error, ErrorContext, Result, parse_count, parse_decimal};
use joinery_parser::Command;
use joinery_storage::{DefaultFactory, EntityFactory, Store};
use log::{debug, info, warn};

use crate::command_name::CommandName;
use crate::config::{EngineConfig, FailurePolicy};
use crate::messages;

/// Owns the store and executes commands against it.
#[derive(Debug)]
pub struct Engine<F: EntityFactory = DefaultFactory> {
    store: Store,
    factory: F,
    config: EngineConfig,
}

impl Engine<DefaultFactory> {
    /// Creates an engine with an empty store and the default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(DefaultFactory)
    }
}

impl Default for Engine<DefaultFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: EntityFactory> Engine<F> {
    /// Creates an engine with an empty store and the given factory.
    pub fn with_factory(factory: F) -> Self {
        Self {
            store: Store::new(),
            factory,
            config: EngineConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the store.
    #[must_use]
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = store;
        self
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Executes one command and returns its result line.
    ///
    /// Business-rule failures come back as `Ok` with the failure message.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` or `InvalidNumber` if the command's input
    /// is unusable. The store is unchanged in that case.
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        debug!("dispatching {command}");

        let outcome = command
            .name()
            .parse::<CommandName>()
            .and_then(|name| self.dispatch(name, command));

        match outcome {
            Ok(line) => Ok(line),
            Err(e) if e.is_input_error() => Err(e),
            Err(e) => {
                debug!("{} rejected: {e}", command.name());
                Ok(e.to_string())
            }
        }
    }

    /// Executes a batch of parsed commands, one result line per command.
    ///
    /// Under [`FailurePolicy::Abort`] the first unusable command ends the
    /// batch and the output is that single failure message.
    pub fn process<'a, I>(&mut self, commands: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Command>,
    {
        self.run_entries(commands.into_iter().map(Ok::<_, Error>))
    }

    /// Parses and executes raw input lines.
    ///
    /// Under [`FailurePolicy::Abort`] every line is parsed before any command
    /// runs, so a malformed line stops the batch with no effect on the store.
    pub fn run_lines<I, S>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = joinery_parser::parse_lines(lines);

        match self.config.failure_policy {
            FailurePolicy::Abort => match parsed.into_iter().collect::<Result<Vec<_>>>() {
                Ok(commands) => self.process(&commands),
                Err(e) => {
                    warn!("batch aborted while reading input: {e}");
                    vec![e.to_string()]
                }
            },
            FailurePolicy::Isolate => self.run_entries(parsed),
        }
    }

    /// Runs parsed entries in order, applying the failure policy to each
    /// unusable one.
    fn run_entries<C, I>(&mut self, entries: I) -> Vec<String>
    where
        C: Borrow<Command>,
        I: IntoIterator<Item = Result<C>>,
    {
        let mut results = Vec::new();
        let mut failed = 0usize;

        for (i, entry) in entries.into_iter().enumerate() {
            let outcome = entry.and_then(|command| {
                let command: &Command = command.borrow();
                self.execute(command).map_err(|e| {
                    e.with_context(
                        ErrorContext::new()
                            .with_line(i + 1)
                            .with_input(command.to_string()),
                    )
                })
            });
            match outcome {
                Ok(line) => results.push(line),
                Err(e) => {
                    failed += 1;
                    if let Some(abort) = self.on_failure(e, &mut results) {
                        return abort;
                    }
                }
            }
        }

        info!("processed {} commands ({failed} failed)", results.len());
        results
    }

    /// Records a failed command. Returns the final output if the batch must
    /// stop.
    fn on_failure(&self, err: Error, results: &mut Vec<String>) -> Option<Vec<String>> {
        match self.config.failure_policy {
            FailurePolicy::Isolate => {
                warn_failure(&err);
                results.push(err.to_string());
                None
            }
            FailurePolicy::Abort => {
                warn!("batch aborted: {err}");
                Some(vec![err.to_string()])
            }
        }
    }

    fn dispatch(&mut self, name: CommandName, command: &Command) -> Result<String> {
        let supplied = command.parameters().len();
        if supplied < name.arity() {
            return Err(Error::missing_parameter(
                name.as_str(),
                name.arity(),
                supplied,
            ));
        }

        match name {
            CommandName::CreateCompany => {
                self.create_company(command.parameter(0)?, command.parameter(1)?)
            }
            CommandName::AddFurnitureToCompany => {
                self.add_furniture_to_company(command.parameter(0)?, command.parameter(1)?)
            }
            CommandName::RemoveFurnitureFromCompany => {
                self.remove_furniture_from_company(command.parameter(0)?, command.parameter(1)?)
            }
            CommandName::FindFurnitureFromCompany => {
                self.find_furniture_from_company(command.parameter(0)?, command.parameter(1)?)
            }
            CommandName::ShowCompanyCatalog => self.show_company_catalog(command.parameter(0)?),
            CommandName::CreateTable => self.create_table(command),
            CommandName::CreateChair => self.create_chair(command),
        }
    }

    fn create_company(&mut self, name: &str, registration_number: &str) -> Result<String> {
        if self.store.contains_company(name) {
            return Err(Error::company_exists(name));
        }
        let company = self.factory.create_company(name, registration_number);
        self.store.insert_company(company)?;
        Ok(messages::company_created(name))
    }

    fn add_furniture_to_company(&mut self, company: &str, model: &str) -> Result<String> {
        self.store.attach(company, model)?;
        Ok(messages::furniture_added(model, company))
    }

    fn remove_furniture_from_company(&mut self, company: &str, model: &str) -> Result<String> {
        if !self.store.detach(company, model)? {
            debug!("{model} was not listed by {company}");
        }
        Ok(messages::furniture_removed(model, company))
    }

    fn find_furniture_from_company(&self, company: &str, model: &str) -> Result<String> {
        let company = self
            .store
            .company(company)
            .ok_or_else(|| Error::company_not_found(company))?;
        company
            .find(model, &self.store)
            .map(ToString::to_string)
            .ok_or_else(|| Error::furniture_not_found(model))
    }

    fn show_company_catalog(&self, company: &str) -> Result<String> {
        self.store
            .company(company)
            .map(|c| c.catalog(&self.store))
            .ok_or_else(|| Error::company_not_found(company))
    }

    fn create_table(&mut self, command: &Command) -> Result<String> {
        let model = command.parameter(0)?;
        let material = command.parameter(1)?;
        let price = parse_decimal("price", command.parameter(2)?)?;
        let height = parse_decimal("height", command.parameter(3)?)?;
        let length = parse_decimal("length", command.parameter(4)?)?;
        let width = parse_decimal("width", command.parameter(5)?)?;

        if self.store.contains_furniture(model) {
            return Err(Error::furniture_exists(model));
        }
        let table = self
            .factory
            .create_table(model, material, price, height, length, width);
        self.store.insert_furniture(table)?;
        Ok(messages::table_created(model))
    }

    fn create_chair(&mut self, command: &Command) -> Result<String> {
        let model = command.parameter(0)?;
        let material = command.parameter(1)?;
        let price = parse_decimal("price", command.parameter(2)?)?;
        let height = parse_decimal("height", command.parameter(3)?)?;
        let legs = parse_count("legs", command.parameter(4)?)?;

        if self.store.contains_furniture(model) {
            return Err(Error::furniture_exists(model));
        }
        let chair = self
            .factory
            .create_chair(model, material, price, height, legs);
        self.store.insert_furniture(chair)?;
        Ok(messages::chair_created(model))
    }
}

fn warn_failure(err: &Error) {
    match &err.context {
        Some(ctx) => warn!("{ctx}: {err}"),
        None => warn!("{err}"),
    }
}
