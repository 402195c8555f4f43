//! Definitions of Solidity functions called during deployment

use alloy::sol;

sol! {
    function initialize(address owner, address auxiliary) external;
}
