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

//! Placeholder weights for `pallet_token_issuance`.
//!
//! The figures below were not produced by a benchmark run. They are hand-estimated from the
//! storage each call touches and only serve tests and development chains. Generate real ones
//! from `benchmarking.rs` for a production runtime with:
//!
//! ```text
//! frame-omni-bencher v1 benchmark pallet \
//!     --runtime=<runtime.wasm> \
//!     --pallet=pallet_token_issuance \
//!     --extrinsic=* --steps=50 --repeat=20 \
//!     --output=substrate/frame/token-issuance/src/weights.rs
//! ```

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

/// Weight functions needed for `pallet_token_issuance`.
pub trait WeightInfo {
	fn set_phase() -> Weight;
	fn pause() -> Weight;
	fn unpause() -> Weight;
	fn set_merkle_root() -> Weight;
	fn set_base_uri() -> Weight;
	fn mint() -> Weight;
	fn mint_multiple(n: u32, p: u32) -> Weight;
	fn airdrop(n: u32) -> Weight;
	fn transfer_ownership() -> Weight;
	fn withdraw() -> Weight;
}

/// Placeholder weights for `pallet_token_issuance`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn set_phase() -> Weight {
		Weight::from_parts(11_874_000, 1499)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn pause() -> Weight {
		Weight::from_parts(10_932_000, 1499)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn unpause() -> Weight {
		Weight::from_parts(10_877_000, 1499)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn set_merkle_root() -> Weight {
		Weight::from_parts(9_815_000, 1489)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn set_base_uri() -> Weight {
		Weight::from_parts(13_210_000, 1489)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn mint() -> Weight {
		Weight::from_parts(64_118_000, 6196)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	fn mint_multiple(n: u32, p: u32) -> Weight {
		Weight::from_parts(71_406_000, 6196)
			.saturating_add(Weight::from_parts(3_182_000, 0).saturating_mul(n.into()))
			.saturating_add(Weight::from_parts(1_207_000, 0).saturating_mul(p.into()))
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
			.saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
	}
	fn airdrop(n: u32) -> Weight {
		Weight::from_parts(18_937_000, 3541)
			.saturating_add(Weight::from_parts(3_054_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
			.saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(9_633_000, 1489)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn withdraw() -> Weight {
		Weight::from_parts(52_480_000, 6196)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn set_phase() -> Weight {
		Weight::from_parts(11_874_000, 1499)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn pause() -> Weight {
		Weight::from_parts(10_932_000, 1499)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn unpause() -> Weight {
		Weight::from_parts(10_877_000, 1499)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_merkle_root() -> Weight {
		Weight::from_parts(9_815_000, 1489)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_base_uri() -> Weight {
		Weight::from_parts(13_210_000, 1489)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn mint() -> Weight {
		Weight::from_parts(64_118_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn mint_multiple(n: u32, p: u32) -> Weight {
		Weight::from_parts(71_406_000, 6196)
			.saturating_add(Weight::from_parts(3_182_000, 0).saturating_mul(n.into()))
			.saturating_add(Weight::from_parts(1_207_000, 0).saturating_mul(p.into()))
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
			.saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
	}
	fn airdrop(n: u32) -> Weight {
		Weight::from_parts(18_937_000, 3541)
			.saturating_add(Weight::from_parts(3_054_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
			.saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(9_633_000, 1489)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn withdraw() -> Weight {
		Weight::from_parts(52_480_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
}
