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

//! Submission flag and disposition constants from CertCli.h.
//!
//! These values form the numeric contract shared with
//! `ICertRequest::Submit` and `ICertRequest::GetCertificate` on the
//! certification authority side. They are reproduced here so that the
//! detector output can be passed verbatim into a submission call.

/// Input is BASE64 with `-----BEGIN`/`-----END` marker lines.
pub const CR_IN_BASE64HEADER: u32 = 0x0;

/// Input is BASE64 without marker lines.
pub const CR_IN_BASE64: u32 = 0x1;

/// Input is binary DER.
pub const CR_IN_BINARY: u32 = 0x2;

/// Let the server determine the request format.
pub const CR_IN_FORMATANY: u32 = 0x0;

/// The request is a bare PKCS#10 certification request.
pub const CR_IN_PKCS10: u32 = 0x100;

/// The request is a Netscape KEYGEN request.
pub const CR_IN_KEYGEN: u32 = 0x200;

/// The request is a PKCS#7 renewal envelope.
pub const CR_IN_PKCS7: u32 = 0x300;

/// The request is a CMC full enrollment request.
pub const CR_IN_CMC: u32 = 0x400;

/// Return the certificate as BASE64 with marker lines.
pub const CR_OUT_BASE64HEADER: u32 = 0x0;

/// Return the certificate as BASE64 without marker lines.
pub const CR_OUT_BASE64: u32 = 0x1;

/// Return the certificate as binary DER.
pub const CR_OUT_BINARY: u32 = 0x2;

/// Include the certificate chain (returns a PKCS#7 message).
pub const CR_OUT_CHAIN: u32 = 0x100;

/// Suppress line breaks in the BASE64 output.
pub const CR_OUT_NOCRLF: u32 = 0x4000_0000;

/// The request was incomplete.
pub const CR_DISP_INCOMPLETE: u32 = 0x0;

/// The certification authority failed to process the request.
pub const CR_DISP_ERROR: u32 = 0x1;

/// The request was denied.
pub const CR_DISP_DENIED: u32 = 0x2;

/// The certificate was issued.
pub const CR_DISP_ISSUED: u32 = 0x3;

/// The certificate was issued out of band.
pub const CR_DISP_ISSUED_OUT_OF_BAND: u32 = 0x4;

/// The request is pending manual approval.
pub const CR_DISP_UNDER_SUBMISSION: u32 = 0x5;

/// The certificate has been revoked.
pub const CR_DISP_REVOKED: u32 = 0x6;
