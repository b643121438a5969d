// Unauthorized
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_NOT_ELECTION_ADMIN: &str = "Unauthorized: only the election admin can register voters";
pub const ERR_NOT_ELIGIBLE: &str = "Unauthorized: address is not eligible to vote";

// NotRegistered / AlreadyRegistered / AlreadyVoted
pub const ERR_NOT_REGISTERED: &str = "Not registered";
pub const ERR_DELEGATE_NOT_REGISTERED: &str = "Not registered: delegate";
pub const ERR_ALREADY_REGISTERED: &str = "Already registered";
pub const ERR_ALREADY_VOTED: &str = "Already voted";

// NotFound
pub const ERR_ELECTION_NOT_FOUND: &str = "Not found: election";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Not found: proposal";
pub const ERR_NO_VOTE_TO_CHANGE: &str = "Not found: no direct vote to change";
pub const ERR_RECEIPT_NOT_FOUND: &str = "Not found: receipt";

// InvalidInput
pub const ERR_NO_PROPOSALS: &str = "Invalid input: no proposals";
pub const ERR_EMPTY_PROPOSAL_NAME: &str = "Invalid input: empty proposal name";
pub const ERR_DEADLINE_NOT_IN_FUTURE: &str = "Invalid input: deadline must be in the future";
pub const ERR_PROPOSAL_OUT_OF_RANGE: &str = "Invalid input: proposal index out of range";
pub const ERR_SELF_DELEGATION: &str = "Invalid input: cannot delegate to self";
pub const ERR_DELEGATION_CYCLE: &str = "Invalid input: delegation cycle";
pub const ERR_VOTE_OVERFLOW: &str = "Invalid input: vote count overflow";

// Tally consistency
pub const ERR_VOTE_UNDERFLOW: &str = "Tally inconsistent: vote count underflow";

// Deadline
pub const ERR_DEADLINE_PASSED: &str = "Deadline passed";
pub const ERR_TOO_EARLY: &str = "Too early: deadline not reached";
