//! Typed ABI bindings for the ICO contracts.
//!
//! Only the surface the client touches is declared here. The contracts are
//! deployed separately and referenced by address; see `client::config`.

use alloy::sol;

sol! {
    /// NFT-gated ERC-20 token sold through the ICO.
    ///
    /// Minting is payable at a fixed per-token price; holders of the gating
    /// NFT collection may instead claim tokens once per owned token id.
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    contract DragonDevToken {
        constructor(address nftContract);

        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function tokenIdsClaimed(uint256 tokenId) external view returns (bool);
        function mint(uint256 amount) external payable;
        function claim() external;
    }
}

sol! {
    /// Enumerable subset of the NFT collection that gates claims.
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    contract DragonDevNFT {
        function balanceOf(address owner) external view returns (uint256);
        function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256);
    }
}
