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

//! Allowlist membership via sorted-pair Merkle proofs.
//!
//! Inner nodes are `H(min(a, b) ++ max(a, b))`, so a proof is just the list of sibling hashes
//! from the leaf upwards and carries no direction bits. A leaf is the hash of the SCALE encoding
//! of the allowlisted account. This is the layout produced by the common Ethereum allowlist
//! tooling when run with the same hasher.
//!
//! Verification is all the runtime needs. [`merkle_root`] and [`merkle_proof`] build the same
//! tree over a leaf set for off-chain tooling, benchmarks and tests.

use alloc::vec::Vec;
use codec::Encode;
use sp_core::H256;
use sp_runtime::traits::Hash;

/// Allowlist leaf of `who`.
pub fn leaf_of<H, AccountId>(who: &AccountId) -> H256
where
	H: Hash<Output = H256>,
	AccountId: Encode,
{
	H::hash_of(who)
}

/// Hash two sibling nodes in canonical order.
pub fn hash_pair<H: Hash<Output = H256>>(a: &H256, b: &H256) -> H256 {
	let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
	let mut node = [0u8; 64];
	node[..32].copy_from_slice(lo.as_bytes());
	node[32..].copy_from_slice(hi.as_bytes());
	<H as Hash>::hash(&node)
}

/// Fold `proof` into `leaf` and compare the result with `root`.
pub fn verify_proof<H: Hash<Output = H256>>(leaf: H256, proof: &[H256], root: &H256) -> bool {
	let computed = proof.iter().fold(leaf, |node, sibling| hash_pair::<H>(&node, sibling));
	computed == *root
}

/// Root of the tree over `leaves`.
///
/// An odd node at the end of a level is carried up unchanged. The root of an empty set is
/// `H256::zero()`, which no proof can reach.
pub fn merkle_root<H, I>(leaves: I) -> H256
where
	H: Hash<Output = H256>,
	I: IntoIterator<Item = H256>,
{
	let mut level: Vec<H256> = leaves.into_iter().collect();
	if level.is_empty() {
		return H256::zero()
	}
	while level.len() > 1 {
		level = next_level::<H>(&level);
	}
	level[0]
}

/// Proof for the leaf at `index`, or `None` if `index` is out of range.
pub fn merkle_proof<H, I>(leaves: I, index: usize) -> Option<Vec<H256>>
where
	H: Hash<Output = H256>,
	I: IntoIterator<Item = H256>,
{
	let mut level: Vec<H256> = leaves.into_iter().collect();
	if index >= level.len() {
		return None
	}

	let mut position = index;
	let mut proof = Vec::new();
	while level.len() > 1 {
		let sibling = position ^ 1;
		if let Some(node) = level.get(sibling) {
			proof.push(*node);
		}
		level = next_level::<H>(&level);
		position /= 2;
	}
	Some(proof)
}

fn next_level<H: Hash<Output = H256>>(level: &[H256]) -> Vec<H256> {
	level
		.chunks(2)
		.map(|pair| match pair {
			[a, b] => hash_pair::<H>(a, b),
			[odd] => *odd,
			_ => unreachable!("chunks(2) yields one or two nodes; qed"),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use sp_runtime::traits::Keccak256;

	fn leaves(n: u64) -> Vec<H256> {
		(0..n).map(|who| leaf_of::<Keccak256, _>(&who)).collect()
	}

	#[test]
	fn every_member_proves_membership() {
		for size in 1..=9 {
			let set = leaves(size);
			let root = merkle_root::<Keccak256, _>(set.clone());
			for (index, leaf) in set.iter().enumerate() {
				let proof = merkle_proof::<Keccak256, _>(set.clone(), index).unwrap();
				assert!(verify_proof::<Keccak256>(*leaf, &proof, &root), "size {size} index {index}");
			}
		}
	}

	#[test]
	fn single_leaf_tree_has_empty_proof() {
		let set = leaves(1);
		assert_eq!(merkle_root::<Keccak256, _>(set.clone()), set[0]);
		assert_eq!(merkle_proof::<Keccak256, _>(set.clone(), 0), Some(vec![]));
		assert!(verify_proof::<Keccak256>(set[0], &[], &set[0]));
	}

	#[test]
	fn proof_of_another_member_is_rejected() {
		let set = leaves(4);
		let root = merkle_root::<Keccak256, _>(set.clone());
		let proof_for_first = merkle_proof::<Keccak256, _>(set.clone(), 0).unwrap();

		let outsider = leaf_of::<Keccak256, _>(&99u64);
		assert!(!verify_proof::<Keccak256>(outsider, &proof_for_first, &root));
		assert!(!verify_proof::<Keccak256>(set[2], &proof_for_first, &root));
	}

	#[test]
	fn tampered_proof_is_rejected() {
		let set = leaves(5);
		let root = merkle_root::<Keccak256, _>(set.clone());
		let mut proof = merkle_proof::<Keccak256, _>(set.clone(), 3).unwrap();
		proof[0] = H256::repeat_byte(0xab);
		assert!(!verify_proof::<Keccak256>(set[3], &proof, &root));
	}

	#[test]
	fn pair_hash_is_order_independent() {
		let a = H256::repeat_byte(1);
		let b = H256::repeat_byte(2);
		assert_eq!(hash_pair::<Keccak256>(&a, &b), hash_pair::<Keccak256>(&b, &a));
	}

	#[test]
	fn out_of_range_index_has_no_proof() {
		assert_eq!(merkle_proof::<Keccak256, _>(leaves(3), 3), None);
		assert_eq!(merkle_proof::<Keccak256, _>(Vec::new(), 0), None);
		assert_eq!(merkle_root::<Keccak256, _>(Vec::new()), H256::zero());
	}
}
