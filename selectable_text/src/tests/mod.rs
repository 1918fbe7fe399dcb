// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_tokenizer;
mod test_truncation;
mod test_validators;
mod utils;
