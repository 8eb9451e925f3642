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

//! # Token Issuance Pallet
//!
//! A pallet that governs who may issue units of a finite, sequentially numbered token
//! collection, at what price, and during which part of the sale.
//!
//! ## Pallet API
//!
//! See the [`pallet`] module for more information about the interfaces this pallet exposes,
//! including its configuration trait, dispatchables, storage items, events and errors.
//!
//! ## Overview
//!
//! Tokens are numbered from `1` upwards in the order they are issued and an index is never
//! reused. The price of a token depends on its index alone (see [`pricing`]), so each sale is
//! one [`Config::UnitPrice`] more expensive than the previous one.
//!
//! Issuance is multiplexed by a single [`SaleMode`]:
//!
//! - [`SaleMode::Open`]: anybody may buy one token at a time with [`mint`](Pallet::mint).
//! - [`SaleMode::Restricted`]: accounts proving allowlist membership against the stored
//!   [`MerkleRoot`] may buy batches with [`mint_multiple`](Pallet::mint_multiple), and the owner
//!   may issue batches for free with [`airdrop`](Pallet::airdrop).
//!
//! The owner moves between the two with [`pause`](Pallet::pause) and
//! [`unpause`](Pallet::unpause). Independently of the mode, the owner advertises a sale phase
//! that can only move forward, and sets the metadata base URI exactly once.
//!
//! Payments are moved to the pallet's proceeds account (derived from [`Config::PalletId`]). The
//! full offered payment is taken, so overpaying is not refunded. The owner collects proceeds
//! with [`withdraw`](Pallet::withdraw).
//!
//! ## Low Level / Implementation Details
//!
//! The owner is a single account set at genesis and replaced with
//! [`transfer_ownership`](Pallet::transfer_ownership). Every dispatchable other than `mint` and
//! `mint_multiple` requires it, failing with [`Error::Unauthorized`] otherwise.
//!
//! All checks of a dispatchable run before its first storage write, so a failing call never
//! leaves partial state behind.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod allowlist;
#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
pub mod pricing;
pub mod types;
pub mod weights;

use alloc::{string::ToString, vec::Vec};
use frame_support::{
	traits::{
		fungible::{Inspect, Mutate},
		tokens::{Fortitude, Preservation},
		Get,
	},
	PalletId,
};
use sp_core::H256;
use sp_runtime::{
	traits::{AccountIdConversion, StaticLookup, Zero},
	ArithmeticError, DispatchError, DispatchResult,
};

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::token-issuance";

type AccountIdLookupOf<T> = <<T as frame_system::Config>::Lookup as StaticLookup>::Source;

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// The overarching event type.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// The currency buyers pay in.
		type Currency: Mutate<Self::AccountId>;

		/// Hasher for allowlist leaves and inner nodes.
		type AllowlistHashing: sp_runtime::traits::Hash<Output = H256>;

		/// Identifier of the account collecting sale proceeds.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Price increment of the linear curve: token `i` costs `i * UnitPrice`.
		#[pallet::constant]
		type UnitPrice: Get<BalanceOf<Self>>;

		/// Largest batch accepted by `mint_multiple` and `airdrop`.
		#[pallet::constant]
		type MaxMintPerCall: Get<u32>;

		/// Largest allowlist proof accepted by `mint_multiple`.
		#[pallet::constant]
		type MaxProofLength: Get<u32>;

		/// Maximum length of the base URI.
		#[pallet::constant]
		type StringLimit: Get<u32>;

		/// Extension appended to every token URI, e.g. `.json`.
		type UriSuffix: Get<&'static [u8]>;

		/// Weight information for extrinsics in this pallet.
		type WeightInfo: WeightInfo;
	}

	/// The administrative account.
	#[pallet::storage]
	pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

	/// Advertised sale phase. Never decreases.
	#[pallet::storage]
	pub type CurrentPhase<T> = StorageValue<_, Phase, ValueQuery>;

	/// Which issuance path is open.
	#[pallet::storage]
	pub type Mode<T> = StorageValue<_, SaleMode, ValueQuery>;

	/// Root of the allowlist tree, see [`allowlist`].
	#[pallet::storage]
	pub type MerkleRoot<T> = StorageValue<_, H256, OptionQuery>;

	/// Metadata base URI. Written at most once.
	#[pallet::storage]
	pub type BaseUri<T: Config> = StorageValue<_, BaseUriOf<T>, OptionQuery>;

	/// Number of tokens issued so far, which is also the highest issued index.
	#[pallet::storage]
	pub type TotalSupply<T> = StorageValue<_, TokenIndex, ValueQuery>;

	/// Owner of each issued token.
	#[pallet::storage]
	pub type TokenOwner<T: Config> =
		StorageMap<_, Twox64Concat, TokenIndex, T::AccountId, OptionQuery>;

	/// Number of tokens attributed to each account.
	#[pallet::storage]
	pub type AccountBalance<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, u32, ValueQuery>;

	#[pallet::genesis_config]
	#[derive(frame_support::DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		/// The administrative account.
		pub owner: Option<T::AccountId>,
		/// Initial sale phase.
		pub phase: Phase,
		/// Initial allowlist root.
		pub merkle_root: Option<H256>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			if let Some(ref owner) = self.owner {
				Owner::<T>::put(owner);
			}
			CurrentPhase::<T>::put(self.phase);
			if let Some(root) = self.merkle_root {
				MerkleRoot::<T>::put(root);
			}
			Pallet::<T>::ensure_proceeds_account();
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// The advertised sale phase was set.
		PhaseAdvanced { phase: Phase },
		/// Issuance switched to the allowlist and airdrop path.
		Paused,
		/// Issuance switched back to the public path.
		Unpaused,
		/// A new allowlist root was stored.
		MerkleRootSet { root: H256 },
		/// The metadata base URI was set.
		BaseUriSet { uri: BaseUriOf<T> },
		/// `count` tokens starting at index `first` were issued to `owner`.
		Issued { owner: T::AccountId, first: TokenIndex, count: u32, paid: BalanceOf<T> },
		/// The administrative account changed.
		OwnershipTransferred { old: Option<T::AccountId>, new: T::AccountId },
		/// Accumulated sale proceeds were paid out.
		ProceedsWithdrawn { to: T::AccountId, amount: BalanceOf<T> },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The caller is not the owner.
		Unauthorized,
		/// The sale phase can only move forward.
		InvalidTransition,
		/// The sale is already in the requested mode.
		AlreadyInState,
		/// The call is not available while the sale is in the given mode.
		WrongPhase(SaleMode),
		/// The offered payment does not cover the price.
		InsufficientFunds,
		/// The proof does not place the caller in the allowlist.
		NotAllowlisted,
		/// The base URI has already been set.
		AlreadySet,
		/// No token with this index has been issued.
		NonexistentToken,
		/// A batch must contain at least one token.
		ZeroQuantity,
		/// The batch is larger than `MaxMintPerCall`.
		MintLimitExceeded,
		/// The proceeds account holds nothing to withdraw.
		NoProceeds,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		fn integrity_test() {
			assert!(T::MaxMintPerCall::get() > 0, "`MaxMintPerCall` must be greater than zero");
			assert!(T::StringLimit::get() > 0, "`StringLimit` must be greater than zero");
			assert!(!T::UnitPrice::get().is_zero(), "`UnitPrice` must be greater than zero");
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Advertise a new sale phase.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner. `phase` must not be
		/// lower than the current phase.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::set_phase())]
		pub fn set_phase(origin: OriginFor<T>, phase: Phase) -> DispatchResult {
			Self::ensure_owner(origin)?;
			let current = CurrentPhase::<T>::get();
			ensure!(phase >= current, Error::<T>::InvalidTransition);

			CurrentPhase::<T>::put(phase);
			log::debug!(target: LOG_TARGET, "sale phase {current} -> {phase}");
			Self::deposit_event(Event::PhaseAdvanced { phase });
			Ok(())
		}

		/// Close the public sale and open the allowlist and airdrop path.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::pause())]
		pub fn pause(origin: OriginFor<T>) -> DispatchResult {
			Self::ensure_owner(origin)?;
			Self::switch_mode(SaleMode::Restricted)?;
			Self::deposit_event(Event::Paused);
			Ok(())
		}

		/// Close the allowlist and airdrop path and reopen the public sale.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::unpause())]
		pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
			Self::ensure_owner(origin)?;
			Self::switch_mode(SaleMode::Open)?;
			Self::deposit_event(Event::Unpaused);
			Ok(())
		}

		/// Replace the allowlist root.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::set_merkle_root())]
		pub fn set_merkle_root(origin: OriginFor<T>, root: H256) -> DispatchResult {
			Self::ensure_owner(origin)?;
			MerkleRoot::<T>::put(root);
			log::debug!(target: LOG_TARGET, "allowlist root set to {root:?}");
			Self::deposit_event(Event::MerkleRootSet { root });
			Ok(())
		}

		/// Set the metadata base URI.
		///
		/// Once a non-empty base URI is stored every further call fails with
		/// [`Error::AlreadySet`], whoever the caller is. An empty one may still be replaced.
		/// Otherwise the dispatch origin must be _Signed_ by the owner.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::set_base_uri())]
		pub fn set_base_uri(origin: OriginFor<T>, uri: BaseUriOf<T>) -> DispatchResult {
			ensure!(
				BaseUri::<T>::get().map_or(true, |base| base.is_empty()),
				Error::<T>::AlreadySet
			);
			Self::ensure_owner(origin)?;

			BaseUri::<T>::put(&uri);
			log::debug!(target: LOG_TARGET, "base uri set ({len} bytes)", len = uri.len());
			Self::deposit_event(Event::BaseUriSet { uri });
			Ok(())
		}

		/// Buy the next token during the public sale.
		///
		/// `payment` must cover the price of the next index and is taken in full.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::mint())]
		pub fn mint(origin: OriginFor<T>, payment: BalanceOf<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let mode = Mode::<T>::get();
			ensure!(mode.admits_public_mint(), Error::<T>::WrongPhase(mode));

			Self::do_purchase(&who, 1, payment)
		}

		/// Buy the next `count` tokens as an allowlist member.
		///
		/// Only available while the sale is [`SaleMode::Restricted`]. `proof` must lead from the
		/// caller's leaf to the stored [`MerkleRoot`], and `payment` must cover the summed price
		/// of all `count` indices. The payment is taken in full.
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::mint_multiple(*count, proof.len() as u32))]
		pub fn mint_multiple(
			origin: OriginFor<T>,
			proof: ProofOf<T>,
			count: u32,
			payment: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let mode = Mode::<T>::get();
			ensure!(mode.admits_restricted_issuance(), Error::<T>::WrongPhase(mode));
			Self::ensure_batch_size(count)?;
			ensure!(Self::is_allowlisted(&who, &proof), Error::<T>::NotAllowlisted);

			Self::do_purchase(&who, count, payment)
		}

		/// Issue `count` tokens to `recipient` without payment.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner. Only available while
		/// the sale is [`SaleMode::Restricted`].
		#[pallet::call_index(7)]
		#[pallet::weight(T::WeightInfo::airdrop(*count))]
		pub fn airdrop(
			origin: OriginFor<T>,
			recipient: AccountIdLookupOf<T>,
			count: u32,
		) -> DispatchResult {
			Self::ensure_owner(origin)?;
			let mode = Mode::<T>::get();
			ensure!(mode.admits_restricted_issuance(), Error::<T>::WrongPhase(mode));
			Self::ensure_batch_size(count)?;
			let recipient = T::Lookup::lookup(recipient)?;

			let first = Self::next_index(count)?;
			Self::issue(&recipient, first, count);
			Self::deposit_event(Event::Issued {
				owner: recipient,
				first,
				count,
				paid: Zero::zero(),
			});
			Ok(())
		}

		/// Hand the administrative role to `new`.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(8)]
		#[pallet::weight(T::WeightInfo::transfer_ownership())]
		pub fn transfer_ownership(
			origin: OriginFor<T>,
			new: AccountIdLookupOf<T>,
		) -> DispatchResult {
			let old = Self::ensure_owner(origin)?;
			let new = T::Lookup::lookup(new)?;

			Owner::<T>::put(&new);
			log::info!(target: LOG_TARGET, "ownership transferred from {old:?} to {new:?}");
			Self::deposit_event(Event::OwnershipTransferred { old: Some(old), new });
			Ok(())
		}

		/// Pay out the proceeds to the owner.
		///
		/// The proceeds account keeps the existential deposit so later payments below it can
		/// still be received.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(9)]
		#[pallet::weight(T::WeightInfo::withdraw())]
		pub fn withdraw(origin: OriginFor<T>) -> DispatchResult {
			let owner = Self::ensure_owner(origin)?;
			let proceeds = Self::account_id();
			let amount =
				T::Currency::reducible_balance(&proceeds, Preservation::Preserve, Fortitude::Polite);
			ensure!(!amount.is_zero(), Error::<T>::NoProceeds);

			T::Currency::transfer(&proceeds, &owner, amount, Preservation::Preserve)?;
			log::info!(target: LOG_TARGET, "withdrew {amount:?} to {owner:?}");
			Self::deposit_event(Event::ProceedsWithdrawn { to: owner, amount });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// The account holding sale proceeds.
	pub fn account_id() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	/// The administrative account, if any.
	pub fn owner() -> Option<T::AccountId> {
		Owner::<T>::get()
	}

	/// Whether `who` may call the privileged dispatchables.
	pub fn is_privileged(who: &T::AccountId) -> bool {
		Owner::<T>::get().map_or(false, |owner| owner == *who)
	}

	/// The advertised sale phase.
	pub fn current_phase() -> Phase {
		CurrentPhase::<T>::get()
	}

	/// Which issuance path is currently open.
	pub fn sale_mode() -> SaleMode {
		Mode::<T>::get()
	}

	/// Root of the current allowlist, if one was set.
	pub fn merkle_root() -> Option<H256> {
		MerkleRoot::<T>::get()
	}

	/// Number of tokens issued so far.
	pub fn total_supply() -> TokenIndex {
		TotalSupply::<T>::get()
	}

	/// Number of tokens issued to `who`.
	pub fn balance_of(who: &T::AccountId) -> u32 {
		AccountBalance::<T>::get(who)
	}

	/// The account `token` was issued to, if it exists.
	pub fn owner_of(token: TokenIndex) -> Option<T::AccountId> {
		TokenOwner::<T>::get(token)
	}

	/// Whether `token` has been issued, i.e. lies in `1..=total_supply()`.
	pub fn exists(token: TokenIndex) -> bool {
		token != 0 && token <= TotalSupply::<T>::get()
	}

	/// Metadata URI of `token`: the base URI, the decimal index and [`Config::UriSuffix`].
	///
	/// Empty while no base URI is set.
	pub fn token_uri(token: TokenIndex) -> Result<Vec<u8>, DispatchError> {
		if !Self::exists(token) {
			return Err(Error::<T>::NonexistentToken.into())
		}
		let base = match BaseUri::<T>::get() {
			Some(base) if !base.is_empty() => base.into_inner(),
			_ => return Ok(Vec::new()),
		};

		let mut uri = base;
		uri.extend_from_slice(token.to_string().as_bytes());
		uri.extend_from_slice(T::UriSuffix::get());
		Ok(uri)
	}

	/// Price of the token at `index`.
	pub fn price_for(index: TokenIndex) -> Option<BalanceOf<T>> {
		pricing::price_for(T::UnitPrice::get(), index)
	}

	/// Payment needed to buy the next `count` tokens at the current supply.
	pub fn quote(count: u32) -> Option<BalanceOf<T>> {
		pricing::batch_price(T::UnitPrice::get(), TotalSupply::<T>::get(), count)
	}

	/// Whether `proof` places `who` in the current allowlist. False while no root is set.
	pub fn is_allowlisted(who: &T::AccountId, proof: &[H256]) -> bool {
		let Some(root) = MerkleRoot::<T>::get() else { return false };
		let leaf = allowlist::leaf_of::<T::AllowlistHashing, _>(who);
		allowlist::verify_proof::<T::AllowlistHashing>(leaf, proof, &root)
	}

	/// Top the proceeds account up to the existential deposit.
	///
	/// Payments smaller than the deposit could not open the account otherwise. Idempotent.
	pub fn ensure_proceeds_account() {
		let proceeds = Self::account_id();
		let minimum = T::Currency::minimum_balance();
		if T::Currency::balance(&proceeds) < minimum {
			T::Currency::set_balance(&proceeds, minimum);
			log::debug!(
				target: LOG_TARGET,
				"endowed proceeds account {proceeds:?} with {minimum:?}"
			);
		}
	}

	fn ensure_owner(origin: T::RuntimeOrigin) -> Result<T::AccountId, DispatchError> {
		let who = frame_system::ensure_signed(origin)?;
		if !Self::is_privileged(&who) {
			return Err(Error::<T>::Unauthorized.into())
		}
		Ok(who)
	}

	fn switch_mode(target: SaleMode) -> DispatchResult {
		let current = Mode::<T>::get();
		if current == target {
			return Err(Error::<T>::AlreadyInState.into())
		}
		Mode::<T>::put(target);
		log::debug!(target: LOG_TARGET, "sale mode {current:?} -> {target:?}");
		Ok(())
	}

	fn ensure_batch_size(count: u32) -> DispatchResult {
		if count == 0 {
			return Err(Error::<T>::ZeroQuantity.into())
		}
		if count > T::MaxMintPerCall::get() {
			return Err(Error::<T>::MintLimitExceeded.into())
		}
		Ok(())
	}

	/// Index the first of the next `count` tokens will get, checking the whole range fits.
	fn next_index(count: u32) -> Result<TokenIndex, DispatchError> {
		let supply = TotalSupply::<T>::get();
		supply.checked_add(count).ok_or(ArithmeticError::Overflow)?;
		Ok(supply + 1)
	}

	fn do_purchase(who: &T::AccountId, count: u32, payment: BalanceOf<T>) -> DispatchResult {
		let first = Self::next_index(count)?;
		let price = Self::quote(count).ok_or(ArithmeticError::Overflow)?;
		if payment < price {
			return Err(Error::<T>::InsufficientFunds.into())
		}

		if !payment.is_zero() {
			T::Currency::transfer(who, &Self::account_id(), payment, Preservation::Preserve)?;
		}
		Self::issue(who, first, count);
		Self::deposit_event(Event::Issued { owner: who.clone(), first, count, paid: payment });
		Ok(())
	}

	/// Record `count` tokens from `first` onwards as owned by `who`.
	///
	/// Callers must have checked the range with [`Self::next_index`].
	fn issue(who: &T::AccountId, first: TokenIndex, count: u32) {
		let last = first + (count - 1);
		for token in first..=last {
			TokenOwner::<T>::insert(token, who);
		}
		AccountBalance::<T>::mutate(who, |balance| *balance = balance.saturating_add(count));
		TotalSupply::<T>::put(last);
		log::debug!(target: LOG_TARGET, "issued tokens {first}..={last} to {who:?}");
	}
}
