//! Scanned by the CLI tests; never compiled.

pub struct Ledger {
    balance: i64,
}

impl Ledger {
    pub fn get_balance(&self) -> i64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: String) {
        self.balance = balance.parse().unwrap_or_default();
    }
}

pub struct Account {
    id: u64,
}

impl Account {
    pub fn get_id(&self) -> u64 {
        self.id
    }
}
