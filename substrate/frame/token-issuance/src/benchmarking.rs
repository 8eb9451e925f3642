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

//! Benchmarks for the token issuance pallet.

use super::*;
use crate::Pallet as TokenIssuance;

use alloc::vec;
use frame_benchmarking::v2::*;
use frame_support::traits::Get;
use frame_system::RawOrigin;
use sp_runtime::traits::Bounded;

fn assert_last_event<T: Config>(generic_event: Event<T>) {
	let event: <T as Config>::RuntimeEvent = generic_event.into();
	frame_system::Pallet::<T>::assert_last_event(event.into());
}

fn owner<T: Config>() -> T::AccountId {
	let owner: T::AccountId = whitelisted_caller();
	Owner::<T>::put(&owner);
	owner
}

fn funded<T: Config>(name: &'static str) -> T::AccountId {
	let who: T::AccountId = account(name, 0, 0);
	T::Currency::set_balance(&who, BalanceOf::<T>::max_value() / 4u32.into());
	TokenIssuance::<T>::ensure_proceeds_account();
	who
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn set_phase() {
		let owner = owner::<T>();
		CurrentPhase::<T>::put(1);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), 2);

		assert_last_event::<T>(Event::PhaseAdvanced { phase: 2 });
	}

	#[benchmark]
	fn pause() {
		let owner = owner::<T>();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner));

		assert_eq!(Mode::<T>::get(), SaleMode::Restricted);
	}

	#[benchmark]
	fn unpause() {
		let owner = owner::<T>();
		Mode::<T>::put(SaleMode::Restricted);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner));

		assert_eq!(Mode::<T>::get(), SaleMode::Open);
	}

	#[benchmark]
	fn set_merkle_root() {
		let owner = owner::<T>();
		let root = H256::repeat_byte(7);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), root);

		assert_last_event::<T>(Event::MerkleRootSet { root });
	}

	#[benchmark]
	fn set_base_uri() {
		let owner = owner::<T>();
		let uri: BaseUriOf<T> =
			vec![b'u'; T::StringLimit::get() as usize].try_into().expect("fits StringLimit; qed");

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), uri.clone());

		assert_last_event::<T>(Event::BaseUriSet { uri });
	}

	#[benchmark]
	fn mint() {
		let buyer = funded::<T>("buyer");
		let price = TokenIssuance::<T>::quote(1).expect("price of the first token fits; qed");

		#[extrinsic_call]
		_(RawOrigin::Signed(buyer.clone()), price);

		assert_eq!(TokenOwner::<T>::get(1), Some(buyer));
	}

	#[benchmark]
	fn mint_multiple(
		n: Linear<1, { T::MaxMintPerCall::get() }>,
		p: Linear<0, { T::MaxProofLength::get() }>,
	) {
		let buyer = funded::<T>("buyer");
		// A proof of `p` siblings over a tree whose root we compute by folding the same siblings.
		let proof: Vec<H256> = (0..p).map(|i| H256::repeat_byte(i as u8)).collect();
		let leaf = allowlist::leaf_of::<T::AllowlistHashing, _>(&buyer);
		let root = proof
			.iter()
			.fold(leaf, |node, sibling| allowlist::hash_pair::<T::AllowlistHashing>(&node, sibling));
		MerkleRoot::<T>::put(root);
		Mode::<T>::put(SaleMode::Restricted);
		let proof: ProofOf<T> = proof.try_into().expect("p is bounded by MaxProofLength; qed");
		let price = TokenIssuance::<T>::quote(n).expect("price of the batch fits; qed");

		#[extrinsic_call]
		_(RawOrigin::Signed(buyer.clone()), proof, n, price);

		assert_eq!(AccountBalance::<T>::get(&buyer), n);
	}

	#[benchmark]
	fn airdrop(n: Linear<1, { T::MaxMintPerCall::get() }>) {
		let owner = owner::<T>();
		let recipient: T::AccountId = account("recipient", 0, 0);
		let recipient_lookup = T::Lookup::unlookup(recipient.clone());
		Mode::<T>::put(SaleMode::Restricted);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), recipient_lookup, n);

		assert_eq!(AccountBalance::<T>::get(&recipient), n);
	}

	#[benchmark]
	fn transfer_ownership() {
		let owner = owner::<T>();
		let new: T::AccountId = account("new", 0, 0);
		let new_lookup = T::Lookup::unlookup(new.clone());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()), new_lookup);

		assert_last_event::<T>(Event::OwnershipTransferred { old: Some(owner), new });
	}

	#[benchmark]
	fn withdraw() {
		let owner = owner::<T>();
		let proceeds = TokenIssuance::<T>::account_id();
		let amount = T::UnitPrice::get() * 1_000u32.into();
		T::Currency::set_balance(&proceeds, amount + T::Currency::minimum_balance());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()));

		assert_last_event::<T>(Event::ProceedsWithdrawn { to: owner, amount });
	}

	impl_benchmark_test_suite!(TokenIssuance, crate::mock::new_test_ext(), crate::mock::Test);
}
