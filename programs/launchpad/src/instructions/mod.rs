pub mod initialize_vesting;
pub mod fund_reward_vault;
pub mod initialize_sale;
pub mod initialize_allowlist;
pub mod attach_sale;
pub mod set_vesting_worker;
pub mod set_allowlist_worker;
pub mod set_merkle_root;
pub mod set_private_sale_start_time;
pub mod end_private_sale;
pub mod set_start_time;
pub mod start_presale;
pub mod pause_presale;
pub mod resume_presale;
pub mod deposit;
pub mod deposit_private_sale;
pub mod withdraw_unsold_token;
pub mod withdraw_funds;
pub mod start_vesting;
pub mod settle_sale;
pub mod redeem_funds;
pub mod update_recipient;
pub mod refund_recipient;
pub mod set_vesting_start_time;
pub mod withdraw_vested;
pub mod emit_vesting_quote;
pub mod emit_recipient_quote;
pub mod emit_participants_page;

pub use initialize_vesting::*;
pub use fund_reward_vault::*;
pub use initialize_sale::*;
pub use initialize_allowlist::*;
pub use attach_sale::*;
pub use set_vesting_worker::*;
pub use set_allowlist_worker::*;
pub use set_merkle_root::*;
pub use set_private_sale_start_time::*;
pub use end_private_sale::*;
pub use set_start_time::*;
pub use start_presale::*;
pub use pause_presale::*;
pub use resume_presale::*;
pub use deposit::*;
pub use deposit_private_sale::*;
pub use withdraw_unsold_token::*;
pub use withdraw_funds::*;
pub use start_vesting::*;
pub use settle_sale::*;
pub use redeem_funds::*;
pub use update_recipient::*;
pub use refund_recipient::*;
pub use set_vesting_start_time::*;
pub use withdraw_vested::*;
pub use emit_vesting_quote::*;
pub use emit_recipient_quote::*;
pub use emit_participants_page::*;
