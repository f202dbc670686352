// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Certificate request grammars.
//!
//! One module per supported encoding, each wrapping a standards
//! conformant DER parser. A trial returns `Some` with the parsed
//! structure when the blob conforms to the grammar and `None`
//! otherwise; `None` is routine ("try the next format"), never an
//! error. All decode state is scoped to the trial and dropped before
//! the next one runs.

pub mod cmc;
pub mod pkcs10;
pub mod pkcs7;
