/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Generates the three call forms of each operation on a service client.
///
/// The client must be `Clone + Send + 'static` and keep its [`Client`](crate::Client) in a field
/// named `inner`. For every `sync, callable, callback => Operation;` line the macro generates:
///
/// - `sync(&self, &Input) -> Outcome<Output>`
/// - `callable(&self, &Input) -> OutcomeFuture<Output>`
/// - `callback(&self, &Input, handler, context)`, where the handler receives the service client,
///   the input, the outcome, and the context
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// pub struct Client {
///     inner: aws_client::Client,
/// }
///
/// aws_client::operations! {
///     Client {
///         /// Returns information about a ledger.
///         describe_ledger, describe_ledger_callable, describe_ledger_async => DescribeLedger;
///     }
/// }
/// ```
#[macro_export]
macro_rules! operations {
    ($client:ty {
        $(
            $(#[$meta:meta])*
            $sync:ident, $callable:ident, $callback:ident => $operation:ty;
        )+
    }) => {
        impl $client {
            $(
                $(#[$meta])*
                pub fn $sync(
                    &self,
                    input: &<$operation as $crate::Operation>::Input,
                ) -> $crate::Outcome<<$operation as $crate::Operation>::Output> {
                    self.inner.call::<$operation>(input)
                }

                #[doc = concat!(
                    "Runs [`", stringify!($sync), "`](Self::", stringify!($sync),
                    ") on the client's executor and returns a future of its outcome."
                )]
                pub fn $callable(
                    &self,
                    input: &<$operation as $crate::Operation>::Input,
                ) -> $crate::OutcomeFuture<<$operation as $crate::Operation>::Output> {
                    self.inner.call_callable::<$operation>(input)
                }

                #[doc = concat!(
                    "Runs [`", stringify!($sync), "`](Self::", stringify!($sync),
                    ") on the client's executor and passes the outcome to `handler`."
                )]
                pub fn $callback<H, C>(
                    &self,
                    input: &<$operation as $crate::Operation>::Input,
                    handler: H,
                    context: C,
                ) where
                    H: FnOnce(
                            &Self,
                            &<$operation as $crate::Operation>::Input,
                            $crate::Outcome<<$operation as $crate::Operation>::Output>,
                            C,
                        ) + Send
                        + 'static,
                    C: Send + 'static,
                {
                    self.inner.call_async::<$operation, Self, H, C>(
                        ::std::clone::Clone::clone(self),
                        input,
                        handler,
                        context,
                    )
                }
            )+
        }
    };
}
