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

//! Test environment for the token issuance pallet.

use super::*;
use crate as pallet_token_issuance;

use frame_support::{derive_impl, parameter_types, traits::ConstU32, PalletId};
use sp_runtime::{traits::Keccak256, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
	pub enum Test
	{
		System: frame_system,
		Balances: pallet_balances,
		TokenIssuance: pallet_token_issuance,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
	type AccountData = pallet_balances::AccountData<u64>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
	type ExistentialDeposit = ExistentialDeposit;
	type AccountStore = System;
}

parameter_types! {
	pub static ExistentialDeposit: u64 = 1;
	pub const TokenIssuancePalletId: PalletId = PalletId(*b"py/issue");
	// 0.0001 of a unit whose smallest denomination is 10^-6.
	pub const UnitPrice: u64 = 100;
	pub const UriSuffix: &'static [u8] = b".json";
}

impl Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Currency = Balances;
	type AllowlistHashing = Keccak256;
	type PalletId = TokenIssuancePalletId;
	type UnitPrice = UnitPrice;
	type MaxMintPerCall = ConstU32<20>;
	type MaxProofLength = ConstU32<16>;
	type StringLimit = ConstU32<64>;
	type UriSuffix = UriSuffix;
	type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
pub const DAVE: u64 = 5;

pub const INITIAL_BALANCE: u64 = 1_000_000;

/// Accounts on the allowlist built by [`allowlist_root`].
pub const ALLOWLISTED: [u64; 3] = [ALICE, BOB, CHARLIE];

pub fn allowlist_leaves() -> Vec<H256> {
	ALLOWLISTED.iter().map(|who| allowlist::leaf_of::<Keccak256, _>(who)).collect()
}

pub fn allowlist_root() -> H256 {
	allowlist::merkle_root::<Keccak256, _>(allowlist_leaves())
}

/// Proof for an account of [`ALLOWLISTED`].
pub fn proof_for(who: u64) -> ProofOf<Test> {
	let index = ALLOWLISTED
		.iter()
		.position(|member| *member == who)
		.expect("account is on the test allowlist");
	allowlist::merkle_proof::<Keccak256, _>(allowlist_leaves(), index)
		.expect("index is in range")
		.try_into()
		.expect("test proofs fit MaxProofLength")
}

pub fn new_test_ext() -> sp_io::TestExternalities {
	ExtBuilder::default().build()
}

pub struct ExtBuilder {
	existential_deposit: u64,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self { existential_deposit: 1 }
	}
}

impl ExtBuilder {
	pub fn existential_deposit(mut self, existential_deposit: u64) -> Self {
		self.existential_deposit = existential_deposit;
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		ExistentialDeposit::set(self.existential_deposit);
		let t = RuntimeGenesisConfig {
			system: Default::default(),
			balances: pallet_balances::GenesisConfig {
				balances: vec![
					(OWNER, INITIAL_BALANCE),
					(ALICE, INITIAL_BALANCE),
					(BOB, INITIAL_BALANCE),
					(CHARLIE, INITIAL_BALANCE),
					(DAVE, INITIAL_BALANCE),
				],
				..Default::default()
			},
			token_issuance: pallet_token_issuance::GenesisConfig {
				owner: Some(OWNER),
				..Default::default()
			},
		}
		.build_storage()
		.unwrap();

		let mut ext = sp_io::TestExternalities::new(t);
		ext.execute_with(|| System::set_block_number(1));
		ext
	}
}
