mod ledger;
mod withdraw;
