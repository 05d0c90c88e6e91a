use ballot_modules_api::{Context, Event, ModuleError, StateCheckpoint, WorkingSet};

use crate::{GenesisConfig, Runtime, RuntimeCall};

/// Host of the demo: committed state, a clock, and sequential call execution.
///
/// Every call takes `&mut self`, so calls never interleave.
pub struct Ledger<C: Context> {
    runtime: Runtime<C>,
    state: StateCheckpoint<C>,
    now: u64,
}

impl<C: Context> Ledger<C> {
    /// Applies genesis and sets the clock to `genesis_time`.
    pub fn new(config: &GenesisConfig<C>, genesis_time: u64) -> anyhow::Result<Self> {
        let runtime = Runtime::default();
        let state = runtime.genesis(config)?;
        Ok(Self {
            runtime,
            state,
            now: genesis_time,
        })
    }

    /// Current clock value.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Moves the clock forward to `time`.
    pub fn advance_to(&mut self, time: u64) -> anyhow::Result<()> {
        anyhow::ensure!(
            time >= self.now,
            "Clock cannot go backwards from {} to {}",
            self.now,
            time
        );
        tracing::debug!(from = self.now, to = time, "Advancing clock");
        self.now = time;
        Ok(())
    }

    /// Executes `call` as `sender` at the current time.
    pub fn execute(
        &mut self,
        sender: &C::Address,
        call: RuntimeCall<C>,
    ) -> Result<Vec<Event>, ModuleError> {
        let context = C::new(sender.clone(), self.now);
        let state = std::mem::take(&mut self.state);
        let (state, result) = self.runtime.apply(call, &context, state);
        self.state = state;
        result
    }

    /// Runs a read-only query against the committed state. Writes made by `query` are dropped.
    pub fn query<R>(&mut self, query: impl FnOnce(&Runtime<C>, &mut WorkingSet<C>) -> R) -> R {
        let mut working_set = std::mem::take(&mut self.state).to_revertable();
        let result = query(&self.runtime, &mut working_set);
        self.state = working_set.revert();
        result
    }

    /// Every committed event, in emission order.
    pub fn events(&self) -> &[Event] {
        self.state.events()
    }
}
