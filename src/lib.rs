// Copyright 2026 Muvon Un Limited
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

//! FAQ ranking engine with a small JSON-file catalog and CLI.
//!
//! The [`ranking`] module is the engine proper and has no I/O. [`catalog`],
//! [`config`] and [`storage`] back the `faqrank` binary.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod formatting;
pub mod ranking;
pub mod storage;
