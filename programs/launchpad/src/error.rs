use anchor_lang::prelude::*;

/// Result of the pure state and math routines; handlers lift it with `?`.
pub type LaunchpadResult<T> = core::result::Result<T, LaunchpadError>;

/// Custom error codes for the launchpad program.
#[error_code]
pub enum LaunchpadError {
    // ----- validation -----
    #[msg("Exchange rate cannot be zero")]
    InvalidRate,

    #[msg("Presale period cannot be zero")]
    InvalidPeriod,

    #[msg("Should be time in future")]
    InvalidTimestamp,

    #[msg("Fraction cannot exceed ACCURACY")]
    InvalidFraction,

    #[msg("Release interval cannot be zero")]
    InvalidReleaseInterval,

    #[msg("Release rate cannot be zero")]
    InvalidReleaseRate,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Amount cannot be zero")]
    InvalidAmount,

    #[msg("Treasury can't be the null key")]
    InvalidTreasury,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Page size must be between 1 and MAX_PAGE_SIZE")]
    InvalidPageSize,

    #[msg("Math overflow")]
    MathOverflow,

    // ----- access -----
    #[msg("Unauthorized: operator signature required")]
    UnauthorizedOperator,

    #[msg("Unauthorized: caller is not the operator nor the worker")]
    UnauthorizedOperatorOrWorker,

    #[msg("Unauthorized: sale is not attached to this vesting pool")]
    UnauthorizedCreditor,

    #[msg("Vesting pool does not belong to this sale")]
    VestingPoolMismatch,

    #[msg("Sale is already attached to the vesting pool")]
    SaleAlreadyAttached,

    // ----- phase / state -----
    #[msg("Private Sale is not started")]
    PrivateSaleNotStarted,

    #[msg("Private Presale already started")]
    PrivateSaleAlreadyStarted,

    #[msg("Private Sale is ended")]
    PrivateSaleEnded,

    #[msg("Private Sale has not been done yet")]
    PrivateSaleNotEnded,

    #[msg("Presale has been already started")]
    PresaleAlreadyStarted,

    #[msg("Presale is not in progress")]
    PresaleNotInProgress,

    #[msg("Presale is not paused")]
    PresaleNotPaused,

    #[msg("Presale has not been ended yet")]
    PresaleNotEnded,

    #[msg("Must be in fill period for private participants to buy in public")]
    NotInFillPeriod,

    #[msg("Unsold tokens already withdrawn")]
    UnsoldAlreadyWithdrawn,

    #[msg("Can only start vesting after withdrawing unsold tokens")]
    UnsoldNotWithdrawn,

    #[msg("Vesting already started")]
    VestingAlreadyStarted,

    #[msg("Not listed yet")]
    NotListedYet,

    #[msg("Refund period ended")]
    RefundPeriodEnded,

    #[msg("Already redeemed")]
    AlreadyRedeemed,

    // ----- allocation -----
    #[msg("Can't exceed the privateMaxAlloc")]
    PrivateCapExceeded,

    #[msg("Can't exceed the publicMaxAlloc")]
    PublicCapExceeded,

    #[msg("Reward pool exhausted")]
    RewardPoolExhausted,

    #[msg("Deposit enough reward tokens to the vesting pool first")]
    InsufficientRewardReserve,

    #[msg("Cannot vest more than the amount to be vested")]
    ExceedsVestingPool,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("No tokens vesting")]
    NothingVesting,

    #[msg("Already withdrawn")]
    AlreadyWithdrawn,

    // ----- proof -----
    #[msg("Not exist on the whitelist")]
    NotWhitelisted,

    #[msg("Invalid allocation record")]
    InvalidAllocationRecord,

    #[msg("Not passed KYC")]
    KycNotPassed,

    #[msg("Not allowed to participate in private sale")]
    PrivateSaleNotAllowed,
}
