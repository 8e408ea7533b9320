#[cfg(test)]
#[path = "exchange_test.rs"]
mod tests;

/// One human prompt paired with the reply it received. Created only after a
/// successful provider call, and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exchange {
    pub human: String,
    pub ai: String,
}

impl Exchange {
    pub fn new(human: &str, ai: &str) -> Exchange {
        return Exchange {
            human: human.to_string(),
            ai: ai.to_string(),
        };
    }
}

/// Every exchange of the current session, oldest first. The list itself grows
/// without bound; only the context window derived from it is capped.
#[derive(Default)]
pub struct History {
    exchanges: Vec<Exchange>,
}

impl History {
    pub fn record(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn exchanges(&self) -> &[Exchange] {
        return &self.exchanges;
    }

    pub fn len(&self) -> usize {
        return self.exchanges.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.exchanges.is_empty();
    }
}
