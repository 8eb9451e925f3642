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

//! Linear pricing curve.
//!
//! The token that will occupy index `i` costs `unit * i`, so every sale is one increment more
//! expensive than the previous one. A batch of `count` tokens bought on top of a supply of `s`
//! therefore costs `unit * ((s + 1) + (s + 2) + ... + (s + count))`.

use sp_runtime::traits::AtLeast32BitUnsigned;

use crate::types::TokenIndex;

/// Price of the token that will be issued at `index`.
///
/// Returns `None` on overflow.
pub fn price_for<Balance: AtLeast32BitUnsigned + Copy>(
	unit: Balance,
	index: TokenIndex,
) -> Option<Balance> {
	unit.checked_mul(&Balance::from(index))
}

/// Total price of the `count` tokens that follow `supply`.
///
/// The index sum is evaluated in closed form, `count * (2 * supply + count + 1) / 2`, which is
/// exact because one of `count` and `2 * supply + count + 1` is always even. Returns `None` on
/// overflow, and `Some(0)` for an empty batch.
pub fn batch_price<Balance: AtLeast32BitUnsigned + Copy>(
	unit: Balance,
	supply: TokenIndex,
	count: u32,
) -> Option<Balance> {
	let supply = u128::from(supply);
	let count = u128::from(count);
	let index_sum = count.checked_mul(2 * supply + count + 1)? / 2;
	let index_sum = Balance::try_from(index_sum).ok()?;
	unit.checked_mul(&index_sum)
}
