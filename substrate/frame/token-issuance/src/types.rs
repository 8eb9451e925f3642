// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Various basic types for use in the token issuance pallet.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::fungible, BoundedVec, PalletError};
use scale_info::TypeInfo;
use sp_core::H256;

use super::Config;

/// Sequential, 1-based index of an issued token. Also the input to the pricing curve.
pub type TokenIndex = u32;

/// Advertised sale phase. Only ever moves forward.
pub type Phase = u32;

/// Balance type of [`Config::Currency`].
pub type BalanceOf<T> = <<T as Config>::Currency as fungible::Inspect<
	<T as frame_system::Config>::AccountId,
>>::Balance;

/// Base URI as stored on chain.
pub type BaseUriOf<T> = BoundedVec<u8, <T as Config>::StringLimit>;

/// Sibling hashes leading from an allowlist leaf up to the root.
pub type ProofOf<T> = BoundedVec<H256, <T as Config>::MaxProofLength>;

/// Which issuance path is currently reachable.
///
/// The two modes are mutually exclusive: `Open` admits the public single-unit `mint` only,
/// `Restricted` admits the allowlisted `mint_multiple` and the owner's `airdrop` only.
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	Eq,
	PartialEq,
	Debug,
	Default,
	TypeInfo,
	MaxEncodedLen,
	PalletError,
)]
pub enum SaleMode {
	/// Public sale. Anybody may `mint` one token at a time.
	#[default]
	Open,
	/// Allowlist window. Only proven allowlist members may buy, and the owner may airdrop.
	Restricted,
}

impl SaleMode {
	/// Whether the public, single-unit purchase path is reachable.
	pub fn admits_public_mint(&self) -> bool {
		matches!(self, SaleMode::Open)
	}

	/// Whether the allowlist purchase path and owner airdrops are reachable.
	pub fn admits_restricted_issuance(&self) -> bool {
		matches!(self, SaleMode::Restricted)
	}
}
